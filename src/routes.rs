use crate::{
    api::{attendance, employee},
    config::Config,
    error::json_error_handler,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{Scope, web};

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    match build_limiter(config.rate_limit_per_min) {
        Some(limiter) => cfg.service(api_scope(&config.api_prefix).wrap(limiter)),
        None => cfg.service(api_scope(&config.api_prefix)),
    };
}

// None when limiting is switched off (0 per minute)
fn build_limiter(requests_per_min: u32) -> Option<Governor<PeerIpKeyExtractor, NoOpMiddleware>> {
    if requests_per_min == 0 {
        return None;
    }

    let per_ms = (60_000 / requests_per_min as u64).max(1);
    let cfg = GovernorConfigBuilder::default()
        .milliseconds_per_request(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()?;

    Some(Governor::new(&cfg))
}

fn api_scope(prefix: &str) -> Scope {
    web::scope(prefix)
        .service(
            web::scope("/employees")
                // /employees
                .service(web::resource("").route(web::get().to(employee::list_employees)))
                // /employees/{id}
                .service(web::resource("/{id}").route(web::get().to(employee::get_employee))),
        )
        // /ponto
        .service(web::resource("/ponto").route(web::post().to(attendance::create_record)))
        .service(
            web::scope("/pontos")
                // /pontos/{cpf}
                .service(web::resource("/{cpf}").route(web::get().to(attendance::list_records)))
                // /pontos/{cpf}/{data}
                .service(
                    web::resource("/{cpf}/{data}")
                        .route(web::delete().to(attendance::delete_records_for_day)),
                ),
        )
}
