use std::sync::Arc;

use crate::modules::blog::application::use_cases::create_blog::ICreateBlogUseCase;
use crate::modules::blog::application::use_cases::delete_blog::IDeleteBlogUseCase;
use crate::modules::blog::application::use_cases::featured_blogs::IFeaturedBlogsUseCase;
use crate::modules::blog::application::use_cases::get_blog::IGetBlogUseCase;
use crate::modules::blog::application::use_cases::list_blogs::IListBlogsUseCase;
use crate::modules::blog::application::use_cases::read_published_blog::IReadPublishedBlogUseCase;
use crate::modules::blog::application::use_cases::update_blog::IUpdateBlogUseCase;

/// Wired blog use cases as handed to the web layer.
#[derive(Clone)]
pub struct BlogUseCases {
    pub list: Arc<dyn IListBlogsUseCase>,
    pub create: Arc<dyn ICreateBlogUseCase>,
    pub get: Arc<dyn IGetBlogUseCase>,
    pub update: Arc<dyn IUpdateBlogUseCase>,
    pub delete: Arc<dyn IDeleteBlogUseCase>,
    pub featured: Arc<dyn IFeaturedBlogsUseCase>,
    pub read_published: Arc<dyn IReadPublishedBlogUseCase>,
}
