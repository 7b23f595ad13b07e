use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::user_profiles;

use super::model::ProfileDB;
use tributo_core::auth::{NewUserProfile, ProfileRepositoryTrait, Role, UserProfile};
use tributo_core::errors::Result;

/// Repository for managing user profile data in the database.
pub struct ProfileRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ProfileRepository {
    /// Creates a new ProfileRepository instance.
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl ProfileRepositoryTrait for ProfileRepository {
    async fn create(&self, new_profile: NewUserProfile) -> Result<UserProfile> {
        self.writer
            .exec(move |conn| {
                let profile_db = ProfileDB::from_new(new_profile);

                diesel::insert_into(user_profiles::table)
                    .values(&profile_db)
                    .execute(conn)
                    .into_core()?;

                Ok(profile_db.into())
            })
            .await
    }

    fn get_by_user_id(&self, user_id_param: &str) -> Result<Option<UserProfile>> {
        let mut conn = get_connection(&self.pool)?;

        let profile = user_profiles::table
            .select(ProfileDB::as_select())
            .filter(user_profiles::user_id.eq(user_id_param))
            .first::<ProfileDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(profile.map(UserProfile::from))
    }

    async fn update_role(&self, user_id_param: &str, role: Role) -> Result<UserProfile> {
        let user_id_owned = user_id_param.to_string();
        self.writer
            .exec(move |conn| {
                diesel::update(
                    user_profiles::table.filter(user_profiles::user_id.eq(&user_id_owned)),
                )
                .set((
                    user_profiles::role.eq(role.as_str()),
                    user_profiles::updated_at.eq(chrono::Utc::now().naive_utc()),
                ))
                .execute(conn)
                .into_core()?;

                let profile = user_profiles::table
                    .select(ProfileDB::as_select())
                    .filter(user_profiles::user_id.eq(&user_id_owned))
                    .first::<ProfileDB>(conn)
                    .into_core()?;

                Ok(profile.into())
            })
            .await
    }
}
