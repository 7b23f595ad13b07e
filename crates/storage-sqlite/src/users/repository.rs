use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::profiles::ProfileDB;
use crate::schema::{registrations, user_profiles, users};

use super::model::{RegistrationDB, UserDB};
use tributo_core::auth::{NewUserProfile, Role};
use tributo_core::errors::Result;
use tributo_core::users::{NewRegistration, NewUser, Registration, User, UserRepositoryTrait};

/// Repository for managing user and registration data in the database.
pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    /// Creates a new UserRepository instance.
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn get_by_id(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;

        let user = users::table
            .select(UserDB::as_select())
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .into_core()?;

        Ok(user.into())
    }

    fn find_by_email(&self, email_param: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;

        let user = users::table
            .select(UserDB::as_select())
            .filter(users::email.eq(email_param))
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(user.map(User::from))
    }

    async fn create_with_registration(
        &self,
        new_user: NewUser,
        new_registration: NewRegistration,
        seed_role: Role,
    ) -> Result<User> {
        self.writer
            .exec(move |conn| {
                let mut user_db: UserDB = new_user.into();
                user_db.id = uuid::Uuid::new_v4().to_string();

                let mut registration_db: RegistrationDB = new_registration.into();
                registration_db.id = uuid::Uuid::new_v4().to_string();

                let profile_db = ProfileDB::from_new(NewUserProfile {
                    user_id: user_db.id.clone(),
                    role: seed_role,
                });

                diesel::insert_into(users::table)
                    .values(&user_db)
                    .execute(conn)
                    .into_core()?;
                diesel::insert_into(registrations::table)
                    .values(&registration_db)
                    .execute(conn)
                    .into_core()?;
                diesel::insert_into(user_profiles::table)
                    .values(&profile_db)
                    .execute(conn)
                    .into_core()?;

                Ok(user_db.into())
            })
            .await
    }

    fn recent_registrations(&self, limit: i64) -> Result<Vec<Registration>> {
        let mut conn = get_connection(&self.pool)?;

        let results = registrations::table
            .select(RegistrationDB::as_select())
            .order(registrations::created_at.desc())
            .limit(limit)
            .load::<RegistrationDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Registration::from).collect())
    }
}
