use std::sync::Arc;

use tracing::{debug, info, instrument};

use models::user::{LoginInput, RegisterInput, User, UserProfile};

use crate::credential;
use crate::errors::ServiceError;
use crate::storage::json_list_store::JsonListStore;

/// User registration and login atop the Record Store.
pub struct UserDirectory {
    store: Arc<JsonListStore<User>>,
}

impl UserDirectory {
    pub fn new(store: Arc<JsonListStore<User>>) -> Arc<Self> {
        Arc::new(Self { store })
    }

    /// Register a new user with a hashed password.
    ///
    /// Field presence, breach-list, and strength checks run first; the
    /// uniqueness check and the append happen inside one store update so a
    /// concurrent registration of the same name cannot slip past.
    #[instrument(skip(self, input), fields(user_name = input.user_name.as_deref().unwrap_or("")))]
    pub async fn register(&self, input: RegisterInput) -> Result<UserProfile, ServiceError> {
        input.validate()?;
        let password = input.password.clone().unwrap_or_default();

        if credential::is_commonly_breached(&password) {
            return Err(ServiceError::Validation(
                "Password is too common and has been found in data breaches. Please choose a stronger password."
                    .into(),
            ));
        }
        if !credential::is_strong(&password) {
            return Err(ServiceError::Validation(
                "Password must be at least 8 characters long and include uppercase, lowercase, digit, and special character."
                    .into(),
            ));
        }

        let user = User {
            first_name: input.first_name.unwrap_or_default(),
            last_name: input.last_name.unwrap_or_default(),
            address: input.address.unwrap_or_default(),
            contact_no: input.contact_no.unwrap_or_default(),
            user_name: input.user_name.unwrap_or_default(),
            password: credential::hash(&password)?,
        };
        let profile = user.profile();

        self.store
            .update(|users| {
                if users.iter().any(|u| u.user_name == user.user_name) {
                    debug!("username taken: {}", user.user_name);
                    return Err(ServiceError::Conflict("Username already exists".into()));
                }
                users.push(user);
                Ok(())
            })
            .await?;

        info!(user_name = %profile.user_name, "user_registered");
        Ok(profile)
    }

    /// Authenticate a user by username and password.
    ///
    /// Unknown usernames and wrong passwords return the same error so the
    /// response cannot be used to enumerate accounts.
    #[instrument(skip(self, input), fields(user_name = input.user_name.as_deref().unwrap_or("")))]
    pub async fn authenticate(&self, input: LoginInput) -> Result<UserProfile, ServiceError> {
        input.validate()?;
        let user_name = input.user_name.unwrap_or_default();
        let password = input.password.unwrap_or_default();

        let users = self.store.load().await;
        let user = users
            .iter()
            .find(|u| u.user_name == user_name)
            .ok_or(ServiceError::Unauthorized)?;

        if !credential::verify(&password, &user.password)? {
            return Err(ServiceError::Unauthorized);
        }

        info!(user_name = %user.user_name, "user_logged_in");
        Ok(user.profile())
    }
}
