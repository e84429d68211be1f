use db::models::user_role::Role;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    /// `admin` or `technician`. Filtering by role also hides disabled users.
    pub role: Option<Role>,
}
