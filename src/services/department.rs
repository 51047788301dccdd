use std::sync::Arc;
use uuid::Uuid;

use crate::domain::department::Department;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::DepartmentRepository;

/// Department together with its derived employee count
#[derive(Debug, Clone)]
pub struct DepartmentView {
    pub department: Department,
    pub employee_count: i64,
}

/// Department CRUD; the only invariant beyond name uniqueness is that a
/// department with assigned employees cannot be deleted
pub struct DepartmentService {
    departments: Arc<dyn DepartmentRepository>,
}

impl DepartmentService {
    pub fn new(departments: Arc<dyn DepartmentRepository>) -> Self {
        Self { departments }
    }

    pub async fn list(&self) -> DomainResult<Vec<DepartmentView>> {
        let mut views = Vec::new();
        for department in self.departments.find_all().await? {
            let employee_count = self.departments.count_employees(department.id).await?;
            views.push(DepartmentView {
                department,
                employee_count,
            });
        }
        Ok(views)
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<DepartmentView> {
        let department = self
            .departments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Department", id))?;
        let employee_count = self.departments.count_employees(id).await?;
        Ok(DepartmentView {
            department,
            employee_count,
        })
    }

    pub async fn create(
        &self,
        name: &str,
        description: Option<String>,
    ) -> DomainResult<DepartmentView> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation(
                "Department name is required".to_string(),
            ));
        }
        if self.departments.find_by_name(name).await?.is_some() {
            return Err(DomainError::Conflict(
                "Department with this name already exists".to_string(),
            ));
        }

        let department = Department {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description,
        };
        let id = self.departments.create(department).await?;
        self.get(id).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        description: Option<String>,
    ) -> DomainResult<DepartmentView> {
        let mut department = self
            .departments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Department", id))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation(
                "Department name is required".to_string(),
            ));
        }
        // only re-check uniqueness when the name actually changes
        if department.name != name && self.departments.find_by_name(name).await?.is_some() {
            return Err(DomainError::Conflict(
                "Department with this name already exists".to_string(),
            ));
        }

        department.name = name.to_string();
        department.description = description;
        self.departments.update(&department).await?;
        self.get(id).await
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let department = self
            .departments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Department", id))?;

        if self.departments.count_employees(department.id).await? > 0 {
            return Err(DomainError::Conflict(
                "Cannot delete department with assigned employees".to_string(),
            ));
        }

        self.departments.delete(id).await
    }
}
