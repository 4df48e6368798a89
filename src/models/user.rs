use serde::{Deserialize, Serialize};

/// Account role. The backend stores this as a lowercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Coach,
    Athlete,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Coach => write!(f, "Coach"),
            Role::Athlete => write!(f, "Athlete"),
        }
    }
}

/// A user record as the backend returns it. The backend owns this data;
/// the client only ever holds a cached copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
    pub email: String,
    pub tel: String,
    pub address: String,
    pub age: i32,
    pub gender: String,
    #[serde(rename = "profilePicture")]
    pub profile_picture: Option<String>,
    pub role: Role,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    #[serde(rename = "activityLevel")]
    pub activity_level: Option<String>,
    pub bio: Option<String>,
    // Coach-specific attributes
    pub certification: Option<String>,
    pub specialities: Option<String>,
    pub price: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_coach(&self) -> bool {
        self.role == Role::Coach
    }
}

/// Login payload. Transient; only ever used as a request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response. Some backend deployments do not issue a
/// token; `TokenPolicy` decides whether that still counts as a login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: Option<String>,
    #[serde(rename = "refreshToken", default)]
    pub refresh_token: Option<String>,
}

/// Full registration payload: the `User` fields plus the password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
    pub email: String,
    pub tel: String,
    pub address: String,
    pub password: String,
    pub age: i32,
    pub gender: String,
    #[serde(rename = "profilePicture")]
    pub profile_picture: Option<String>,
    pub role: Role,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    #[serde(rename = "activityLevel")]
    pub activity_level: Option<String>,
    pub bio: Option<String>,
    pub certification: Option<String>,
    pub specialities: Option<String>,
    pub price: Option<String>,
}
