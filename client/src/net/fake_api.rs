//! Scripted `AuthApi` for page controller tests.

use std::cell::{Cell, RefCell};

use super::api::{ApiError, AuthApi};
use super::types::{Credentials, LoginResponse, RegisterResponse, Registration, Role, User};

#[derive(Default)]
pub struct FakeAuthApi {
    login_result: RefCell<Option<Result<LoginResponse, ApiError>>>,
    register_result: RefCell<Option<Result<RegisterResponse, ApiError>>>,
    pub login_calls: Cell<usize>,
    pub register_calls: Cell<usize>,
    pub last_credentials: RefCell<Option<Credentials>>,
    pub last_registration: RefCell<Option<Registration>>,
}

impl FakeAuthApi {
    pub fn login_ok(role: &str) -> Self {
        let api = Self::default();
        *api.login_result.borrow_mut() = Some(Ok(LoginResponse {
            jwt: "jwt-abc".to_owned(),
            user: User {
                id: "u-1".to_owned(),
                name: "Marcus".to_owned(),
                email: "marcus@gym.com".to_owned(),
                role: Role::from(role.to_owned()),
            },
        }));
        api
    }

    pub fn login_err(err: ApiError) -> Self {
        let api = Self::default();
        *api.login_result.borrow_mut() = Some(Err(err));
        api
    }

    pub fn register_ok(message: Option<&str>) -> Self {
        let api = Self::default();
        *api.register_result.borrow_mut() =
            Some(Ok(RegisterResponse { message: message.map(str::to_owned) }));
        api
    }

    pub fn register_err(err: ApiError) -> Self {
        let api = Self::default();
        *api.register_result.borrow_mut() = Some(Err(err));
        api
    }
}

impl AuthApi for FakeAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.login_calls.set(self.login_calls.get() + 1);
        *self.last_credentials.borrow_mut() = Some(credentials.clone());
        self.login_result
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(ApiError::Request("no scripted login response".to_owned())))
    }

    async fn register(&self, registration: &Registration) -> Result<RegisterResponse, ApiError> {
        self.register_calls.set(self.register_calls.get() + 1);
        *self.last_registration.borrow_mut() = Some(registration.clone());
        self.register_result
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(ApiError::Request("no scripted register response".to_owned())))
    }
}
