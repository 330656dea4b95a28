//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::authenticated_account::AuthenticatedAccount;
use crate::domain::models::auth::authentication_request::AuthMode;
use crate::errors::AppError;
use crate::services::auth::token_service::TokenService;
use crate::utils::cookie_manager::{CookieManager, CookieNames};

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode.clone();

        Box::pin(async move {
            // 토큰 검증 시도
            let auth_result = authenticate_request(&req);

            match (&mode, auth_result) {
                // Required 모드에서 인증 실패
                (AuthMode::Required, Err(err)) => {
                    log::warn!("인증 실패: {}", err);
                    let response = HttpResponse::Unauthorized()
                        .json(serde_json::json!({
                            "error": "authentication_required",
                            "message": "유효한 인증 토큰이 필요합니다"
                        }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                },
                // Required 모드에서 인증 성공
                (AuthMode::Required, Ok(account)) => {
                    // 계정 정보를 Request Extensions에 저장
                    log::debug!("인증 성공: {}", account.email);
                    req.extensions_mut().insert(account);
                },
                // Optional 모드에서 인증 성공
                (AuthMode::Optional, Ok(account)) => {
                    log::debug!("선택적 인증 성공: {}", account.email);
                    req.extensions_mut().insert(account);
                },
                // Optional 모드에서 인증 실패 (진행 허용)
                (AuthMode::Optional, Err(_)) => {
                    log::debug!("선택적 인증: 토큰 없음, 요청 진행");
                },
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 JWT 토큰을 추출하고 검증
///
/// Authorization 헤더의 Bearer 토큰을 우선 사용하고,
/// 없으면 액세스 토큰 쿠키를 사용합니다.
fn authenticate_request(req: &ServiceRequest) -> Result<AuthenticatedAccount, AppError> {
    let token_service = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| AppError::InternalError("토큰 서비스가 등록되지 않았습니다".to_string()))?;

    let token = extract_token(req, token_service)?;

    // 토큰 검증 및 클레임 추출
    let claims = token_service.verify_token(&token)?;

    Ok(AuthenticatedAccount {
        email: claims.sub,
        provider_type: claims.provider_type,
    })
}

fn extract_token(req: &ServiceRequest, token_service: &TokenService) -> Result<String, AppError> {
    // 1. Authorization 헤더에서 Bearer 토큰 추출
    if let Some(auth_header) = req.headers().get("Authorization").and_then(|h| h.to_str().ok()) {
        return token_service
            .extract_bearer_token(auth_header)
            .map(|token| token.to_string());
    }

    // 2. 액세스 토큰 쿠키에서 추출
    CookieManager::get_cookie(CookieNames::AccessToken, req.request())
        .ok_or_else(|| AppError::AuthenticationError("인증 토큰이 없습니다".to_string()))
}
