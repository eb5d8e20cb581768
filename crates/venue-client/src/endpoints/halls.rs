use serde::de::IgnoredAny;
use tracing::debug;
use venue_schema::forms::{InsertHallForm, UpdateHallForm};
use venue_schema::types::Hall;
use venue_schema::HallId;
use venue_utils::error::exts::{IntoTypedError, ResultExt};
use venue_utils::{ErrorCategory, Result};

use crate::errors::{ManageHallError, RequestHttpError};
use crate::routes::Route;
use crate::{Client, Session};

impl Client {
    #[tracing::instrument(skip_all)]
    pub async fn halls(&self) -> Result<Vec<Hall>, RequestHttpError> {
        let route = Route::Halls;
        let request = self.request(&route, None)?;
        self.send(&route, request).await
    }

    #[tracing::instrument(skip_all, fields(hall.id = %id))]
    pub async fn hall(&self, id: &HallId) -> Result<Hall, RequestHttpError> {
        let route = Route::Hall { id };
        let request = self.request(&route, None)?;
        self.send(&route, request).await
    }

    #[tracing::instrument(skip_all)]
    pub async fn create_hall(
        &self,
        session: &Session,
        form: &InsertHallForm<'_>,
    ) -> Result<Hall, ManageHallError> {
        let route = Route::CreateHall;
        let request = self
            .request(&route, Some(session))
            .change_context(ManageHallError)?;

        form.validate()
            .into_typed_error()
            .category(ErrorCategory::User)
            .change_context(ManageHallError)?;

        let hall: Hall = self
            .send(&route, request.json(form))
            .await
            .change_context(ManageHallError)?;

        debug!(hall.id = %hall.id, "created hall");
        Ok(hall)
    }

    #[tracing::instrument(skip_all, fields(hall.id = %id))]
    pub async fn update_hall(
        &self,
        session: &Session,
        id: &HallId,
        form: &UpdateHallForm<'_>,
    ) -> Result<Hall, ManageHallError> {
        let route = Route::UpdateHall { id };
        let request = self
            .request(&route, Some(session))
            .change_context(ManageHallError)?;

        form.validate()
            .into_typed_error()
            .category(ErrorCategory::User)
            .change_context(ManageHallError)?;

        self.send(&route, request.json(form))
            .await
            .change_context(ManageHallError)
    }

    #[tracing::instrument(skip_all, fields(hall.id = %id))]
    pub async fn delete_hall(&self, session: &Session, id: &HallId) -> Result<(), ManageHallError> {
        let route = Route::DeleteHall { id };
        let request = self
            .request(&route, Some(session))
            .change_context(ManageHallError)?;

        let _: IgnoredAny = self
            .send(&route, request)
            .await
            .change_context(ManageHallError)?;

        debug!("deleted hall");
        Ok(())
    }
}
