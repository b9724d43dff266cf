use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use log::debug;
use serde_json::json;
use shared::SiteRoute;

use crate::config::ServerConfig;

pub fn configure_routes(cfg: &mut web::ServiceConfig, config: &ServerConfig) {
    let index = config.index_path();

    cfg.service(web::resource("/health").route(web::get().to(health)))
        .service(
            Files::new("/", &config.dist_dir)
                .index_file(config.index_file.clone())
                .default_handler(fn_service(move |req: ServiceRequest| {
                    let index = index.clone();
                    async move {
                        let (req, _) = req.into_parts();
                        let known = SiteRoute::from_path(req.path()).is_some();
                        debug!("Serving app shell for {} (known route: {})", req.path(), known);

                        let file = NamedFile::open_async(&index).await?;
                        let res = if known {
                            file.into_response(&req)
                        } else {
                            // unknown paths still get the shell so the client renders its 404 page
                            let mut res = file
                                .use_etag(false)
                                .use_last_modified(false)
                                .into_response(&req);
                            *res.status_mut() = StatusCode::NOT_FOUND;
                            res
                        };
                        Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
                    }
                })),
        );
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use shared::NAV_ITEMS;
    use tempfile::TempDir;

    const SHELL: &str = "<html><body>shell</body></html>";

    fn dist_with_shell() -> (TempDir, ServerConfig) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), SHELL).unwrap();
        std::fs::write(dir.path().join("frontend-abc123.js"), "console.log(1);").unwrap();
        let config = ServerConfig {
            dist_dir: dir.path().to_path_buf(),
            ..ServerConfig::default()
        };
        (dir, config)
    }

    #[actix_web::test]
    async fn every_nav_route_gets_the_app_shell() {
        let (_dir, config) = dist_with_shell();
        let app =
            test::init_service(App::new().configure(|cfg| configure_routes(cfg, &config))).await;

        for item in NAV_ITEMS.iter() {
            let req = test::TestRequest::get().uri(item.href).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{}", item.href);
            let body = test::read_body(resp).await;
            assert_eq!(&body[..], SHELL.as_bytes(), "{}", item.href);
        }
    }

    #[actix_web::test]
    async fn unknown_paths_get_shell_with_404() {
        let (_dir, config) = dist_with_shell();
        let app =
            test::init_service(App::new().configure(|cfg| configure_routes(cfg, &config))).await;

        let req = test::TestRequest::get().uri("/nao-existe").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], SHELL.as_bytes());
    }

    #[actix_web::test]
    async fn static_assets_are_served_from_dist() {
        let (_dir, config) = dist_with_shell();
        let app =
            test::init_service(App::new().configure(|cfg| configure_routes(cfg, &config))).await;

        let req = test::TestRequest::get().uri("/frontend-abc123.js").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"console.log(1);");
    }

    #[actix_web::test]
    async fn health_reports_ok() {
        let (_dir, config) = dist_with_shell();
        let app =
            test::init_service(App::new().configure(|cfg| configure_routes(cfg, &config))).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "status": "ok" }));
    }
}
