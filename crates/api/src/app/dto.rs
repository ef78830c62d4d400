//! Request/response DTOs and JSON mapping.
//!
//! Wire casing is camelCase (`seatCount`, `managerId`, `userName`).

use serde::{Deserialize, Serialize};

use marquee_auth::User;
use marquee_core::{TheaterId, UserId};
use marquee_theaters::{Theater, TheaterDraft};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TheaterRequest {
    pub name: String,
    pub address: String,
    pub seat_count: i32,
    #[serde(default)]
    pub manager_id: Option<UserId>,
}

impl TheaterRequest {
    pub fn into_draft(self) -> TheaterDraft {
        TheaterDraft {
            name: self.name,
            address: self.address,
            seat_count: self.seat_count,
            manager_id: self.manager_id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TheaterDto {
    pub id: TheaterId,
    pub name: String,
    pub address: String,
    pub seat_count: i32,
    pub manager_id: Option<UserId>,
}

impl From<Theater> for TheaterDto {
    fn from(t: Theater) -> Self {
        Self {
            id: t.id,
            name: t.name,
            address: t.address,
            seat_count: t.seat_count,
            manager_id: t.manager_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub user_name: String,
    pub password: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: UserId,
    pub user_name: String,
    pub roles: Vec<String>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            user_name: u.user_name,
            roles: u.roles.into_iter().map(|r| r.as_str().to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: UserDto,
}
