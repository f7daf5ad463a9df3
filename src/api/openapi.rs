use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::modules::auth::adapter::incoming::web::routes as auth_routes;
use crate::modules::blog::adapter::incoming::web::routes as blog_routes;
use crate::modules::inquiry::adapter::incoming::web::routes as inquiry_routes;
use crate::modules::newsletter::adapter::incoming::web::routes as newsletter_routes;
use crate::modules::services::adapter::incoming::web::routes as service_routes;
use crate::modules::site_content::adapter::incoming::web::routes as site_content_routes;
use crate::modules::team::adapter::incoming::web::routes as team_routes;
use crate::modules::uploads::adapter::incoming::web::routes as upload_routes;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Law firm website API",
        description = "Content management and public read API for the firm's website."
    ),
    paths(
        auth_routes::login::login_handler,
        auth_routes::me::me_handler,
        auth_routes::logout::logout_handler,
        auth_routes::refresh::refresh_handler,
        blog_routes::list::list_blogs_handler,
        blog_routes::create::create_blog_handler,
        blog_routes::get::get_blog_handler,
        blog_routes::update::update_blog_handler,
        blog_routes::delete::delete_blog_handler,
        blog_routes::featured::featured_blogs_handler,
        blog_routes::by_category::blogs_by_category_handler,
        blog_routes::public_list::public_blogs_handler,
        blog_routes::public_read::public_blog_by_slug_handler,
        service_routes::list::list_services_handler,
        service_routes::create::create_service_handler,
        service_routes::get::get_service_handler,
        service_routes::update::update_service_handler,
        service_routes::delete::delete_service_handler,
        service_routes::public_list::public_services_handler,
        service_routes::public_read::public_service_by_slug_handler,
        team_routes::list::list_team_handler,
        team_routes::create::create_member_handler,
        team_routes::get::get_member_handler,
        team_routes::update::update_member_handler,
        team_routes::delete::delete_member_handler,
        team_routes::public_list::public_team_handler,
        site_content_routes::about::get_about_handler,
        site_content_routes::about::put_about_handler,
        site_content_routes::about::public_about_handler,
        site_content_routes::contact::get_contact_settings_handler,
        site_content_routes::contact::put_contact_settings_handler,
        site_content_routes::contact::public_contact_handler,
        inquiry_routes::submit::submit_inquiry_handler,
        inquiry_routes::list::list_inquiries_handler,
        newsletter_routes::subscribe::subscribe_handler,
        newsletter_routes::unsubscribe::unsubscribe_handler,
        newsletter_routes::list::list_subscribers_handler,
        upload_routes::upload::upload_image_handler,
        upload_routes::delete::delete_image_handler,
    ),
    tags(
        (name = "auth", description = "Login, session and token lifecycle"),
        (name = "blogs", description = "Blog post management"),
        (name = "services", description = "Practice area management"),
        (name = "team", description = "Team member management"),
        (name = "site-content", description = "About page and contact settings"),
        (name = "inquiries", description = "Contact inquiry inbox"),
        (name = "subscribers", description = "Newsletter subscriber list"),
        (name = "uploads", description = "Image uploads"),
        (name = "public", description = "Unauthenticated website reads and intake"),
    )
)]
pub struct ApiDoc;

/// Raw OpenAPI document for tooling.
#[get("/api/docs/openapi.json")]
pub async fn openapi_json_handler() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_routes_expose_their_query_parameters() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

        for path in ["/api/blogs", "/api/services", "/api/team"] {
            let params = doc["paths"][path]["get"]["parameters"]
                .as_array()
                .cloned()
                .unwrap_or_default();
            assert!(
                params.iter().any(|p| p["name"] == "sort"),
                "{path} is missing its sort parameter"
            );
            assert!(params.iter().any(|p| p["name"] == "page"));
        }
    }

    #[test]
    fn document_covers_the_public_surface() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();

        for path in [
            "/api/public/blogs",
            "/api/public/services",
            "/api/public/team",
            "/api/public/about",
            "/api/public/contact",
            "/api/public/subscribe",
            "/api/public/unsubscribe",
        ] {
            assert!(paths.contains_key(path), "{path} missing from document");
        }
    }
}
