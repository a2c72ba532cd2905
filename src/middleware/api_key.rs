use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, ResponseError,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::config::AppConfig;
use crate::error::ApiError;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Rejects requests whose `x-api-key` header does not match the configured
/// client key. Runs before extractors, so the body is never read on a
/// mismatch.
pub struct ApiKeyAuth;

impl<S, B> Transform<S, ServiceRequest> for ApiKeyAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ApiKeyAuthService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ApiKeyAuthService { service }))
    }
}

pub struct ApiKeyAuthService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ApiKeyAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let key_matches = match req.app_data::<web::Data<AppConfig>>() {
            Some(config) => req
                .headers()
                .get(API_KEY_HEADER)
                .map(|value| value.to_str().ok() == Some(config.client_api_key.as_str())),
            None => {
                log::error!("AppConfig missing from app data, refusing request");
                Some(false)
            }
        };

        let rejection = match key_matches {
            Some(true) => {
                let fut = self.service.call(req);
                return Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) });
            }
            Some(false) => "invalid",
            None => "missing",
        };

        log::warn!(
            "Rejected {} {}: {} API key",
            req.method(),
            req.path(),
            rejection
        );

        let response = ApiError::Unauthorized.error_response();
        Box::pin(ready(Ok(req.into_response(response).map_into_right_body())))
    }
}
