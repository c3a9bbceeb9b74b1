//! Cross-entity consistency checks run before Room, Student and Payment
//! writes. Every check is read-then-validate and has no side effects.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    DomainError, DomainResult, PaymentData, RepositoryProvider, Room, RoomData, StudentData,
};

pub struct ReferentialValidator {
    repos: Arc<dyn RepositoryProvider>,
}

impl ReferentialValidator {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    async fn require_building(&self, building_id: i32) -> DomainResult<()> {
        match self.repos.buildings().find_by_id(building_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::BuildingNotFound(building_id)),
        }
    }

    /// Room must exist and sit in `building_id`.
    async fn require_room_in(&self, room_id: i32, building_id: i32) -> DomainResult<Room> {
        let room = self
            .repos
            .rooms()
            .find_by_id(room_id)
            .await?
            .ok_or(DomainError::RoomNotFound(Some(room_id)))?;
        if room.building_id != building_id {
            return Err(DomainError::RoomBuildingMismatch {
                room_id,
                building_id,
            });
        }
        Ok(room)
    }

    pub async fn check_room(&self, data: &RoomData) -> DomainResult<()> {
        if data.building_id == 0 {
            return Err(DomainError::MissingReference("building"));
        }
        self.require_building(data.building_id).await
    }

    pub async fn check_student(&self, data: &StudentData) -> DomainResult<()> {
        if data.building_id == 0 || data.room_id == 0 {
            return Err(DomainError::MissingReference("building and room"));
        }
        self.require_building(data.building_id).await?;
        self.require_room_in(data.room_id, data.building_id).await?;
        debug!(
            student_no = %data.student_no,
            room_id = data.room_id,
            "Student references verified"
        );
        Ok(())
    }

    pub async fn check_payment(&self, data: &PaymentData) -> DomainResult<()> {
        if data.building_id == 0 || data.room_id == 0 {
            return Err(DomainError::MissingReference("building and room"));
        }
        self.require_building(data.building_id).await?;
        self.require_room_in(data.room_id, data.building_id).await?;

        let Some(student_id) = data.student_id.filter(|id| *id != 0) else {
            return Ok(());
        };
        let student = self
            .repos
            .students()
            .find_by_id(student_id)
            .await?
            .ok_or(DomainError::StudentNotFound(student_id))?;
        if student.room_id != Some(data.room_id) || student.building_id != Some(data.building_id) {
            return Err(DomainError::StudentRoomMismatch {
                student_id,
                room_id: data.room_id,
                building_id: data.building_id,
            });
        }
        Ok(())
    }
}
