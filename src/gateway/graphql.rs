//! GraphQL implementation of the backend gateway.

use crate::domain::UserId;
use crate::gateway::{GatewayError, StatusAction, UserGateway};
use crate::models::{UserInput, UserRecord};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const ALL_USERS_QUERY: &str = r"
    {
        allUsers {
            id
            name
            phoneNumber
            email
            address
            roleId
            dateCreated
            dateEdited
            status
        }
    }
";

const CREATE_USER_MUTATION: &str = r"
    mutation CreateUser($newUser: UserInput!) {
        createUser(newUser: $newUser) {
            id
            name
            phoneNumber
            email
            address
            roleId
            dateCreated
            dateEdited
            status
        }
    }
";

const UPDATE_USER_MUTATION: &str = r"
    mutation UpdateUser($updateUser: UserInput!) {
        updateUser(updateUser: $updateUser) {
            id
            name
            phoneNumber
            email
            address
            roleId
            dateCreated
            dateEdited
            status
        }
    }
";

const ACTIVATE_DEACTIVATE_MUTATION: &str = r"
    mutation ActivateDeactivateUsers($userIds: [Int!]!, $action: Int!) {
        activateDeactivateUsers(userIds: $userIds, action: $action)
    }
";

#[derive(Serialize)]
struct GraphQlRequest<'a, V: Serialize> {
    query: &'a str,
    variables: V,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

#[derive(Deserialize)]
struct AllUsersData {
    #[serde(rename = "allUsers")]
    all_users: Vec<UserRecord>,
}

#[derive(Deserialize)]
struct CreateUserData {
    #[serde(rename = "createUser")]
    create_user: UserRecord,
}

#[derive(Deserialize)]
struct UpdateUserData {
    #[serde(rename = "updateUser")]
    update_user: UserRecord,
}

#[derive(Deserialize)]
struct SetStatusData {
    #[serde(rename = "activateDeactivateUsers")]
    activate_deactivate_users: bool,
}

#[derive(Serialize)]
struct CreateVariables {
    #[serde(rename = "newUser")]
    new_user: UserInput,
}

#[derive(Serialize)]
struct UpdateVariables {
    #[serde(rename = "updateUser")]
    update_user: UserInput,
}

#[derive(Serialize)]
struct SetStatusVariables<'a> {
    #[serde(rename = "userIds")]
    user_ids: &'a [UserId],
    action: i32,
}

/// Reqwest-backed [`UserGateway`] speaking the backend's GraphQL schema.
#[derive(Clone)]
pub struct GraphQlGateway {
    client: Client,
    endpoint: String,
}

impl GraphQlGateway {
    /// Builds a gateway with a pooled client and a request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Rosterr/1.0")
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    async fn execute<V, T>(&self, query: &str, variables: V) -> Result<T, String>
    where
        V: Serialize + Send,
        T: for<'de> Deserialize<'de>,
    {
        let request_body = GraphQlRequest { query, variables };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("gateway returned {status}: {body}"));
        }

        let response: GraphQlResponse<T> =
            response.json().await.map_err(|e| e.to_string())?;

        if let Some(errors) = response.errors {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(messages.join("; "));
        }

        response
            .data
            .ok_or_else(|| "gateway response carried no data".to_string())
    }
}

#[async_trait::async_trait]
impl UserGateway for GraphQlGateway {
    async fn list_users(&self) -> Result<Vec<UserRecord>, GatewayError> {
        let data: AllUsersData = self
            .execute(ALL_USERS_QUERY, serde_json::Map::new())
            .await
            .map_err(GatewayError::Fetch)?;

        Ok(data.all_users)
    }

    async fn create_user(&self, new_user: UserInput) -> Result<UserRecord, GatewayError> {
        let data: CreateUserData = self
            .execute(CREATE_USER_MUTATION, CreateVariables { new_user })
            .await
            .map_err(GatewayError::Mutation)?;

        Ok(data.create_user)
    }

    async fn update_user(&self, update: UserInput) -> Result<UserRecord, GatewayError> {
        let data: UpdateUserData = self
            .execute(UPDATE_USER_MUTATION, UpdateVariables { update_user: update })
            .await
            .map_err(GatewayError::Mutation)?;

        Ok(data.update_user)
    }

    async fn set_status(
        &self,
        user_ids: &[UserId],
        action: StatusAction,
    ) -> Result<bool, GatewayError> {
        let data: SetStatusData = self
            .execute(
                ACTIVATE_DEACTIVATE_MUTATION,
                SetStatusVariables {
                    user_ids,
                    action: action.code(),
                },
            )
            .await
            .map_err(GatewayError::Mutation)?;

        Ok(data.activate_deactivate_users)
    }
}
