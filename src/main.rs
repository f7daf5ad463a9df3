mod api;
mod health;
mod modules;
mod shared;
#[cfg(test)]
mod test_support;

use std::env;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use deadpool_redis::Runtime;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::modules::auth::adapter::incoming::web::routes as auth_routes;
use crate::modules::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::modules::auth::adapter::outgoing::{
    TokenRevocationRedis, UserQueryPostgres, UserRepositoryPostgres,
};
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::ports::outgoing::{TokenProvider, TokenRevocationStore};
use crate::modules::auth::application::services::jwt::{JwtConfig, JwtService};
use crate::modules::auth::application::services::lockout::LockoutPolicy;
use crate::modules::auth::application::use_cases::current_user::CurrentUserUseCase;
use crate::modules::auth::application::use_cases::login::LoginUseCase;
use crate::modules::auth::application::use_cases::logout::LogoutUseCase;
use crate::modules::auth::application::use_cases::refresh::RefreshTokenUseCase;

use crate::modules::blog::adapter::incoming::web::routes as blog_routes;
use crate::modules::blog::adapter::outgoing::{BlogQueryPostgres, BlogRepositoryPostgres};
use crate::modules::blog::application::use_cases::create_blog::CreateBlogUseCase;
use crate::modules::blog::application::use_cases::delete_blog::DeleteBlogUseCase;
use crate::modules::blog::application::use_cases::featured_blogs::FeaturedBlogsUseCase;
use crate::modules::blog::application::use_cases::get_blog::GetBlogUseCase;
use crate::modules::blog::application::use_cases::list_blogs::ListBlogsUseCase;
use crate::modules::blog::application::use_cases::read_published_blog::ReadPublishedBlogUseCase;
use crate::modules::blog::application::use_cases::update_blog::UpdateBlogUseCase;
use crate::modules::blog::application::BlogUseCases;

use crate::modules::services::adapter::incoming::web::routes as service_routes;
use crate::modules::services::adapter::outgoing::{ServiceQueryPostgres, ServiceRepositoryPostgres};
use crate::modules::services::application::use_cases::active_services::ActiveServicesUseCase;
use crate::modules::services::application::use_cases::create_service::CreateServiceUseCase;
use crate::modules::services::application::use_cases::delete_service::DeleteServiceUseCase;
use crate::modules::services::application::use_cases::get_service::GetServiceUseCase;
use crate::modules::services::application::use_cases::list_services::ListServicesUseCase;
use crate::modules::services::application::use_cases::read_active_service::ReadActiveServiceUseCase;
use crate::modules::services::application::use_cases::update_service::UpdateServiceUseCase;
use crate::modules::services::application::ServiceUseCases;

use crate::modules::team::adapter::incoming::web::routes as team_routes;
use crate::modules::team::adapter::outgoing::{TeamQueryPostgres, TeamRepositoryPostgres};
use crate::modules::team::application::use_cases::active_members::ActiveMembersUseCase;
use crate::modules::team::application::use_cases::create_member::CreateMemberUseCase;
use crate::modules::team::application::use_cases::delete_member::DeleteMemberUseCase;
use crate::modules::team::application::use_cases::get_member::GetMemberUseCase;
use crate::modules::team::application::use_cases::list_members::ListMembersUseCase;
use crate::modules::team::application::use_cases::update_member::UpdateMemberUseCase;
use crate::modules::team::application::TeamUseCases;

use crate::modules::site_content::adapter::incoming::web::routes as site_content_routes;
use crate::modules::site_content::adapter::outgoing::{
    AboutStorePostgres, ContactSettingsStorePostgres,
};
use crate::modules::site_content::application::use_cases::about::{
    GetAboutUseCase, PutAboutUseCase,
};
use crate::modules::site_content::application::use_cases::contact_settings::{
    GetContactSettingsUseCase, PutContactSettingsUseCase,
};
use crate::modules::site_content::application::SiteContentUseCases;

use crate::modules::inquiry::adapter::incoming::web::routes as inquiry_routes;
use crate::modules::inquiry::adapter::outgoing::InquiryRepositoryPostgres;
use crate::modules::inquiry::application::use_cases::list_inquiries::ListInquiriesUseCase;
use crate::modules::inquiry::application::use_cases::submit_inquiry::SubmitInquiryUseCase;
use crate::modules::inquiry::application::InquiryUseCases;

use crate::modules::newsletter::adapter::incoming::web::routes as newsletter_routes;
use crate::modules::newsletter::adapter::outgoing::SubscriberRepositoryPostgres;
use crate::modules::newsletter::application::use_cases::list_subscribers::ListSubscribersUseCase;
use crate::modules::newsletter::application::use_cases::subscribe::SubscribeUseCase;
use crate::modules::newsletter::application::use_cases::unsubscribe::UnsubscribeUseCase;
use crate::modules::newsletter::application::NewsletterUseCases;

use crate::modules::uploads::adapter::incoming::web::routes as upload_routes;
use crate::modules::uploads::adapter::outgoing::LocalImageStore;
use crate::modules::uploads::application::use_cases::delete_image::DeleteImageUseCase;
use crate::modules::uploads::application::use_cases::upload_image::UploadImageUseCase;
use crate::modules::uploads::application::{UploadConfig, UploadUseCases};

use crate::shared::api::json_config::custom_json_config;

/// Everything the route handlers need, wired once at startup.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub redis: Arc<deadpool_redis::Pool>,
    pub auth: AuthUseCases,
    pub blogs: BlogUseCases,
    pub services: ServiceUseCases,
    pub team: TeamUseCases,
    pub site_content: SiteContentUseCases,
    pub inquiries: InquiryUseCases,
    pub newsletter: NewsletterUseCases,
    pub uploads: UploadUseCases,
}

fn build_state(
    db: Arc<DatabaseConnection>,
    redis: Arc<deadpool_redis::Pool>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    jwt_config: &JwtConfig,
) -> AppState {
    let revocation: Arc<dyn TokenRevocationStore + Send + Sync> =
        Arc::new(TokenRevocationRedis::new(redis.clone()));

    let auth = AuthUseCases {
        login: Arc::new(LoginUseCase::new(
            UserQueryPostgres::new(db.clone()),
            UserRepositoryPostgres::new(db.clone()),
            Arc::new(Argon2Hasher::new()),
            token_provider.clone(),
            LockoutPolicy::from_env(),
        )),
        current_user: Arc::new(CurrentUserUseCase::new(
            UserQueryPostgres::new(db.clone()),
            token_provider.clone(),
            revocation.clone(),
        )),
        logout: Arc::new(LogoutUseCase::new(
            token_provider.clone(),
            revocation.clone(),
            jwt_config.refresh_grace,
        )),
        refresh: Arc::new(RefreshTokenUseCase::new(
            token_provider,
            revocation,
            jwt_config.refresh_grace,
        )),
    };

    let blog_query = BlogQueryPostgres::new(db.clone());
    let blog_repo = BlogRepositoryPostgres::new(db.clone());
    let blogs = BlogUseCases {
        list: Arc::new(ListBlogsUseCase::new(blog_query.clone())),
        create: Arc::new(CreateBlogUseCase::new(blog_repo.clone())),
        get: Arc::new(GetBlogUseCase::new(blog_query.clone())),
        update: Arc::new(UpdateBlogUseCase::new(blog_repo.clone())),
        delete: Arc::new(DeleteBlogUseCase::new(blog_repo.clone())),
        featured: Arc::new(FeaturedBlogsUseCase::new(blog_query.clone())),
        read_published: Arc::new(ReadPublishedBlogUseCase::new(blog_query, blog_repo)),
    };

    let service_query = ServiceQueryPostgres::new(db.clone());
    let service_repo = ServiceRepositoryPostgres::new(db.clone());
    let services = ServiceUseCases {
        list: Arc::new(ListServicesUseCase::new(service_query.clone())),
        create: Arc::new(CreateServiceUseCase::new(service_repo.clone())),
        get: Arc::new(GetServiceUseCase::new(service_query.clone())),
        update: Arc::new(UpdateServiceUseCase::new(service_repo.clone())),
        delete: Arc::new(DeleteServiceUseCase::new(service_repo.clone())),
        active: Arc::new(ActiveServicesUseCase::new(service_query.clone())),
        read_active: Arc::new(ReadActiveServiceUseCase::new(service_query, service_repo)),
    };

    let team_query = TeamQueryPostgres::new(db.clone());
    let team_repo = TeamRepositoryPostgres::new(db.clone());
    let team = TeamUseCases {
        list: Arc::new(ListMembersUseCase::new(team_query.clone())),
        create: Arc::new(CreateMemberUseCase::new(team_repo.clone())),
        get: Arc::new(GetMemberUseCase::new(team_query.clone())),
        update: Arc::new(UpdateMemberUseCase::new(team_repo.clone())),
        delete: Arc::new(DeleteMemberUseCase::new(team_repo)),
        active: Arc::new(ActiveMembersUseCase::new(team_query)),
    };

    let about_store = AboutStorePostgres::new(db.clone());
    let contact_store = ContactSettingsStorePostgres::new(db.clone());
    let site_content = SiteContentUseCases {
        get_about: Arc::new(GetAboutUseCase::new(about_store.clone())),
        put_about: Arc::new(PutAboutUseCase::new(about_store)),
        get_contact: Arc::new(GetContactSettingsUseCase::new(contact_store.clone())),
        put_contact: Arc::new(PutContactSettingsUseCase::new(contact_store)),
    };

    let inquiry_repo = InquiryRepositoryPostgres::new(db.clone());
    let inquiries = InquiryUseCases {
        submit: Arc::new(SubmitInquiryUseCase::new(inquiry_repo.clone())),
        list: Arc::new(ListInquiriesUseCase::new(inquiry_repo)),
    };

    let subscriber_repo = SubscriberRepositoryPostgres::new(db.clone());
    let newsletter = NewsletterUseCases {
        subscribe: Arc::new(SubscribeUseCase::new(subscriber_repo.clone())),
        unsubscribe: Arc::new(UnsubscribeUseCase::new(subscriber_repo.clone())),
        list: Arc::new(ListSubscribersUseCase::new(subscriber_repo)),
    };

    let upload_config = UploadConfig::from_env();
    let image_store = LocalImageStore::new(upload_config.dir.clone());
    let uploads = UploadUseCases {
        upload: Arc::new(UploadImageUseCase::new(image_store.clone(), upload_config)),
        delete: Arc::new(DeleteImageUseCase::new(image_store)),
    };

    AppState {
        db,
        redis,
        auth,
        blogs,
        services,
        team,
        site_content,
        inquiries,
        newsletter,
        uploads,
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let mut connect_options = ConnectOptions::new(database_url);
    connect_options.sqlx_logging(false);
    let db = Arc::new(
        Database::connect(connect_options)
            .await
            .expect("Failed to connect to postgres"),
    );

    let redis_url = env::var("REDIS_URL").expect("REDIS_URL must be set");
    let redis = Arc::new(
        deadpool_redis::Config::from_url(redis_url)
            .create_pool(Some(Runtime::Tokio1))
            .expect("Failed to create redis pool"),
    );

    let jwt_config = JwtConfig::from_env();
    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtService::new(jwt_config.clone()));

    let state = build_state(db, redis, token_provider.clone(), &jwt_config);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .expect("Invalid PORT value");

    info!(%host, port, "Starting server");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(token_provider.clone()))
            .app_data(custom_json_config())
            .service(health::health_handler)
            .service(health::ready_handler)
            .service(api::openapi::openapi_json_handler)
            .service(auth_routes::login::login_handler)
            .service(auth_routes::me::me_handler)
            .service(auth_routes::logout::logout_handler)
            .service(auth_routes::refresh::refresh_handler)
            // Literal segments before `{id}` so /featured is not read as an id.
            .service(blog_routes::featured::featured_blogs_handler)
            .service(blog_routes::by_category::blogs_by_category_handler)
            .service(blog_routes::list::list_blogs_handler)
            .service(blog_routes::create::create_blog_handler)
            .service(blog_routes::get::get_blog_handler)
            .service(blog_routes::update::update_blog_handler)
            .service(blog_routes::delete::delete_blog_handler)
            .service(blog_routes::public_list::public_blogs_handler)
            .service(blog_routes::public_read::public_blog_by_slug_handler)
            .service(service_routes::list::list_services_handler)
            .service(service_routes::create::create_service_handler)
            .service(service_routes::get::get_service_handler)
            .service(service_routes::update::update_service_handler)
            .service(service_routes::delete::delete_service_handler)
            .service(service_routes::public_list::public_services_handler)
            .service(service_routes::public_read::public_service_by_slug_handler)
            .service(team_routes::list::list_team_handler)
            .service(team_routes::create::create_member_handler)
            .service(team_routes::get::get_member_handler)
            .service(team_routes::update::update_member_handler)
            .service(team_routes::delete::delete_member_handler)
            .service(team_routes::public_list::public_team_handler)
            .service(site_content_routes::about::get_about_handler)
            .service(site_content_routes::about::put_about_handler)
            .service(site_content_routes::about::public_about_handler)
            .service(site_content_routes::contact::get_contact_settings_handler)
            .service(site_content_routes::contact::put_contact_settings_handler)
            .service(site_content_routes::contact::public_contact_handler)
            .service(inquiry_routes::submit::submit_inquiry_handler)
            .service(inquiry_routes::list::list_inquiries_handler)
            .service(newsletter_routes::subscribe::subscribe_handler)
            .service(newsletter_routes::unsubscribe::unsubscribe_handler)
            .service(newsletter_routes::list::list_subscribers_handler)
            .service(upload_routes::upload::upload_image_handler)
            .service(upload_routes::delete::delete_image_handler)
    })
    .bind((host, port))?
    .run()
    .await
}
