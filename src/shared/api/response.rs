// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use serde_json::Value;

/// Pagination block attached to list responses.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct Pagination {
    pub current_page: u64,
    pub last_page: u64,
    pub per_page: u64,
    pub total: u64,
}

impl Pagination {
    pub fn new(current_page: u64, per_page: u64, total: u64) -> Self {
        let last_page = if total == 0 {
            1
        } else {
            total.div_ceil(per_page.max(1))
        };

        Self {
            current_page,
            last_page,
            per_page,
            total,
        }
    }
}

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            pagination: None,
            error: None,
            code: None,
            details: None,
        })
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            success: true,
            data: Some(data),
            pagination: None,
            error: None,
            code: None,
            details: None,
        })
    }

    pub fn paginated(data: T, pagination: Pagination) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            pagination: Some(pagination),
            error: None,
            code: None,
            details: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            pagination: None,
            error: Some(message.to_string()),
            code: Some(code.to_string()),
            details: None,
        })
    }

    pub fn error_with_details(
        status: StatusCode,
        code: &str,
        message: &str,
        details: Value,
    ) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            pagination: None,
            error: Some(message.to_string()),
            code: Some(code.to_string()),
            details: Some(details),
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn conflict(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, code, message)
    }

    pub fn locked(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::LOCKED, code, message)
    }

    pub fn unprocessable(message: &str, details: Value) -> HttpResponse {
        Self::error_with_details(
            StatusCode::UNPROCESSABLE_ENTITY,
            "VALIDATION_ERROR",
            message,
            details,
        )
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }

    pub fn internal_error_with_code(code: &str) -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            code,
            "An unexpected error occurred",
        )
    }
}
