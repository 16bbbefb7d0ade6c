use crate::error::ApiResult;
use crate::models::{Page, UpdateRoleRequest, User, UserRole};
use crate::services::api_client::{ApiClient, CancelToken};
use crate::services::query::{FilterField, Query};
use crate::services::transport::Transport;

const USERS_PATH: &str = "/users";

/// Filterable / sortable user attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Id,
    Username,
    Email,
    Phone,
    Role,
    CreatedAt,
}

impl FilterField for UserField {
    fn name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Username => "username",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Role => "role",
            Self::CreatedAt => "createdAt",
        }
    }
}

impl<T: Transport> ApiClient<T> {
    pub async fn list_users(&self, query: &Query<UserField>, cancel: &CancelToken) -> ApiResult<Page<User>> {
        self.get_cancellable(USERS_PATH, &query.to_pairs(), cancel)
            .await
    }

    pub async fn get_user(&self, id: i64) -> ApiResult<User> {
        self.get(&format!("{}/{}", USERS_PATH, id), &[]).await
    }

    pub async fn update_user_role(&self, id: i64, role: UserRole) -> ApiResult<User> {
        log::info!("👤 [USERS] Changing role of user {} to {}", id, role);
        self.patch(
            &format!("{}/{}/role", USERS_PATH, id),
            &UpdateRoleRequest { role },
        )
        .await
    }

    pub async fn delete_user(&self, id: i64) -> ApiResult<()> {
        log::info!("🗑️ [USERS] Deleting user {}", id);
        self.delete(&format!("{}/{}", USERS_PATH, id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::query::SortDirection;
    use crate::services::testing::{ok, signed_in_client};
    use crate::services::transport::Method;

    #[tokio::test]
    async fn listing_sends_paging_and_filter() {
        let (api, _storage) = signed_in_client(vec![ok(
            r#"{"content":[{"id":3,"username":"carol","role":"ADMIN"}],"page":1,"size":5,"totalElements":6}"#,
        )]);
        let query = Query::new()
            .page(1)
            .size(5)
            .sort_by(UserField::Username, SortDirection::Asc)
            .eq(UserField::Role, "ADMIN");

        let page = api.list_users(&query, &CancelToken::new()).await.unwrap();
        assert_eq!(page.content[0].username, "carol");
        assert!(!page.has_next());

        assert_eq!(
            api.transport().last_request().url,
            "http://api.test/v1/users?page=1&size=5&sort=username%2Casc&filter=role%3D%3D%27ADMIN%27"
        );
    }

    #[tokio::test]
    async fn role_change_patches_the_role_resource() {
        let (api, _storage) = signed_in_client(vec![ok(
            r#"{"id":3,"username":"carol","role":"STAFF"}"#,
        )]);
        let user = api.update_user_role(3, UserRole::Staff).await.unwrap();
        assert_eq!(user.role, UserRole::Staff);

        let request = api.transport().last_request();
        assert_eq!(request.method, Method::Patch);
        assert_eq!(request.url, "http://api.test/v1/users/3/role");
        assert_eq!(request.body.as_deref(), Some(r#"{"role":"STAFF"}"#));
    }

    #[tokio::test]
    async fn delete_accepts_empty_data() {
        let (api, _storage) = signed_in_client(vec![ok("null")]);
        api.delete_user(3).await.unwrap();
        assert_eq!(api.transport().last_request().method, Method::Delete);
    }
}
