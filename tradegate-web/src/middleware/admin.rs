//! Admin capability check middleware.
//!
//! The content-management API is guarded by a static bearer token from the
//! configuration. An empty configured token disables the whole admin
//! surface. This is an explicit per-request capability check, not a user
//! account system; authentication proper is out of scope and handled by the
//! deployment (reverse proxy, VPN, ...).

use actix_service::{Service, Transform};
use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::{header::AUTHORIZATION, Method},
    Error, HttpResponse,
};
use futures::{
    future::{ok, LocalBoxFuture, Ready},
    FutureExt,
};
use std::{cell::RefCell, rc::Rc};
use tradegate_models::web::WebResponse;

const BEARER_PREFIX: &str = "Bearer ";

/// Admin authentication middleware factory.
pub struct AdminAuth {
    token: Rc<String>,
}

impl AdminAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Rc::new(token.into()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AdminAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AdminAuthMiddleware {
            service: Rc::new(RefCell::new(service)),
            token: Rc::clone(&self.token),
        })
    }
}

/// Admin authentication middleware implementation.
///
/// 1. Extracts the bearer token from the Authorization header
/// 2. Compares it against the configured admin token
/// 3. Rejects when the configured token is empty (admin surface disabled)
pub struct AdminAuthMiddleware<S> {
    service: Rc<RefCell<S>>,
    token: Rc<String>,
}

impl<S, B> Service<ServiceRequest> for AdminAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = S::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let expected = Rc::clone(&self.token);
        async move {
            // Fast path for OPTIONS requests
            if Method::OPTIONS == req.method() {
                return srv.call(req).await.map(|res| res.map_into_left_body());
            }

            let presented = req
                .headers()
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.strip_prefix(BEARER_PREFIX));

            let authorized = match presented {
                Some(token) => !expected.is_empty() && token == expected.as_str(),
                None => false,
            };

            if !authorized {
                return Ok(req
                    .into_response(
                        HttpResponse::Unauthorized()
                            .json(WebResponse::<()>::error("Admin token missing or invalid")),
                    )
                    .map_into_right_body());
            }

            srv.call(req).await.map(|res| res.map_into_left_body())
        }
        .boxed_local()
    }
}
