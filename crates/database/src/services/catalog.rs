use crate::entities::{courses, faculties, study_programs};
use crate::error::ServiceError;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, SqlErr, TransactionTrait,
};
use uuid::Uuid;

/// Partial update: `None` fields are left untouched
#[derive(Default)]
pub struct UpdateFaculty {
    pub code: Option<String>,
    pub name: Option<String>,
}

/// Partial update: `None` fields are left untouched
#[derive(Default)]
pub struct UpdateProgram {
    pub faculty_id: Option<Uuid>,
    pub code: Option<String>,
    pub name: Option<String>,
}

pub struct CatalogService;

impl CatalogService {
    /// Faculties ordered by name, for option lists
    pub async fn faculty_options(
        db: &DatabaseConnection,
    ) -> Result<Vec<faculties::Model>, ServiceError> {
        let items = faculties::Entity::find()
            .order_by_asc(faculties::Column::Name)
            .all(db)
            .await?;
        Ok(items)
    }

    /// Programs with their owning faculty, ordered by program code,
    /// optionally filtered by faculty code
    pub async fn program_options(
        db: &DatabaseConnection,
        faculty_code: Option<String>,
    ) -> Result<Vec<(study_programs::Model, faculties::Model)>, ServiceError> {
        let mut query = study_programs::Entity::find()
            .find_also_related(faculties::Entity)
            .order_by_asc(study_programs::Column::Code);

        if let Some(code) = faculty_code {
            let code = code.trim().to_string();
            if !code.is_empty() {
                query = query.filter(faculties::Column::Code.eq(code));
            }
        }

        let rows = query.all(db).await?;
        Ok(rows
            .into_iter()
            .filter_map(|(program, faculty)| faculty.map(|f| (program, f)))
            .collect())
    }

    pub async fn create_faculty(
        db: &DatabaseConnection,
        code: String,
        name: String,
    ) -> Result<Uuid, ServiceError> {
        let code = code.trim().to_string();
        if code.is_empty() {
            return Err(ServiceError::validation("code is required"));
        }
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ServiceError::validation("name is required"));
        }

        let id = Uuid::new_v4();
        let faculty = faculties::ActiveModel {
            id: Set(id),
            code: Set(code),
            name: Set(name),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };

        match faculties::Entity::insert(faculty).exec(db).await {
            Ok(_) => Ok(id),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(ServiceError::validation("faculty code already in use"))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn update_faculty(
        db: &DatabaseConnection,
        id: Uuid,
        input: UpdateFaculty,
    ) -> Result<(), ServiceError> {
        let faculty = faculties::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("faculty"))?;

        let mut faculty: faculties::ActiveModel = faculty.into();
        let mut changed = false;

        if let Some(code) = input.code {
            let code = code.trim().to_string();
            if !code.is_empty() {
                faculty.code = Set(code);
                changed = true;
            }
        }
        if let Some(name) = input.name {
            let name = name.trim().to_string();
            if !name.is_empty() {
                faculty.name = Set(name);
                changed = true;
            }
        }

        if changed {
            match faculties::Entity::update(faculty).exec(db).await {
                Ok(_) => {}
                Err(err)
                    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
                {
                    return Err(ServiceError::validation("faculty code already in use"));
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }

    /// Removes a faculty with its programs; courses of those programs are
    /// detached rather than deleted. Commits as one transaction.
    pub async fn delete_faculty(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
        let txn = db.begin().await?;

        let faculty = faculties::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(ServiceError::NotFound("faculty"))?;

        let program_ids: Vec<Uuid> = study_programs::Entity::find()
            .filter(study_programs::Column::FacultyId.eq(id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();

        if !program_ids.is_empty() {
            courses::Entity::update_many()
                .col_expr(courses::Column::ProgramId, Expr::value(None::<Uuid>))
                .filter(courses::Column::ProgramId.is_in(program_ids.clone()))
                .exec(&txn)
                .await?;
            study_programs::Entity::delete_many()
                .filter(study_programs::Column::Id.is_in(program_ids))
                .exec(&txn)
                .await?;
        }

        faculties::Entity::delete_by_id(faculty.id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    pub async fn create_program(
        db: &DatabaseConnection,
        faculty_id: Uuid,
        code: String,
        name: String,
    ) -> Result<Uuid, ServiceError> {
        let code = code.trim().to_string();
        if code.is_empty() {
            return Err(ServiceError::validation("code is required"));
        }
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ServiceError::validation("name is required"));
        }

        let faculty_exists = faculties::Entity::find_by_id(faculty_id).count(db).await? > 0;
        if !faculty_exists {
            return Err(ServiceError::NotFound("faculty"));
        }

        let id = Uuid::new_v4();
        let program = study_programs::ActiveModel {
            id: Set(id),
            faculty_id: Set(faculty_id),
            code: Set(code),
            name: Set(name),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };

        match study_programs::Entity::insert(program).exec(db).await {
            Ok(_) => Ok(id),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(ServiceError::validation("program code already in use"))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn update_program(
        db: &DatabaseConnection,
        id: Uuid,
        input: UpdateProgram,
    ) -> Result<(), ServiceError> {
        let program = study_programs::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("study program"))?;

        let mut program: study_programs::ActiveModel = program.into();
        let mut changed = false;

        if let Some(faculty_id) = input.faculty_id {
            let faculty_exists = faculties::Entity::find_by_id(faculty_id).count(db).await? > 0;
            if !faculty_exists {
                return Err(ServiceError::NotFound("faculty"));
            }
            program.faculty_id = Set(faculty_id);
            changed = true;
        }
        if let Some(code) = input.code {
            let code = code.trim().to_string();
            if !code.is_empty() {
                program.code = Set(code);
                changed = true;
            }
        }
        if let Some(name) = input.name {
            let name = name.trim().to_string();
            if !name.is_empty() {
                program.name = Set(name);
                changed = true;
            }
        }

        if changed {
            match study_programs::Entity::update(program).exec(db).await {
                Ok(_) => {}
                Err(err)
                    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
                {
                    return Err(ServiceError::validation("program code already in use"));
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }

    /// Removes a program, detaching its courses. Commits as one transaction.
    pub async fn delete_program(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
        let txn = db.begin().await?;

        let program = study_programs::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(ServiceError::NotFound("study program"))?;

        courses::Entity::update_many()
            .col_expr(courses::Column::ProgramId, Expr::value(None::<Uuid>))
            .filter(courses::Column::ProgramId.eq(id))
            .exec(&txn)
            .await?;
        study_programs::Entity::delete_by_id(program.id)
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(())
    }
}
