//! Per-entity wiring for the generic CRUD operations.
//!
//! Each [`Resource`] ties an entity type to its API path, its commands, its
//! slice of the offline dataset and its offline write semantics. The sources
//! and the client are written once against this trait.

use std::fmt;
use std::time::Duration;

use focus_config::SimulatedLatency;
use focus_models::{
    Class, ClassId, CreateClassDto, CreateStudentDto, CreateTeacherDto, Student, StudentId,
    Teacher, TeacherId, UpdateClassDto, UpdateStudentDto, UpdateTeacherDto,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::dataset::FallbackDataset;
use crate::search::Searchable;

pub trait Resource: Send + Sync + 'static {
    type Id: Clone + fmt::Debug + fmt::Display + PartialEq + Send + Sync + 'static;
    type Entity: Serialize + DeserializeOwned + Searchable + Clone + Send + Sync + 'static;
    type Create: Serialize + Clone + Send + Sync + 'static;
    type Update: Serialize + Clone + Send + Sync + 'static;

    /// Collection path under the API base URL, e.g. `students`.
    const PATH: &'static str;

    /// Singular display name used in errors and logs.
    const NAME: &'static str;

    /// Whether an offline delete of an unknown id is an error. When `false`
    /// the offline delete always reports success.
    const STRICT_OFFLINE_DELETE: bool;

    fn id(entity: &Self::Entity) -> &Self::Id;

    fn records(dataset: &FallbackDataset) -> &[Self::Entity];

    /// Build a record from a create command, minting a local id.
    fn assemble(dto: Self::Create) -> Self::Entity;

    fn merge(entity: Self::Entity, dto: Self::Update) -> Self::Entity;

    fn list_latency(latency: &SimulatedLatency) -> Duration {
        latency.list
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Students;

#[derive(Debug, Clone, Copy)]
pub struct Teachers;

#[derive(Debug, Clone, Copy)]
pub struct Classes;

impl Resource for Students {
    type Id = StudentId;
    type Entity = Student;
    type Create = CreateStudentDto;
    type Update = UpdateStudentDto;

    const PATH: &'static str = "students";
    const NAME: &'static str = "Student";
    const STRICT_OFFLINE_DELETE: bool = false;

    fn id(entity: &Student) -> &StudentId {
        &entity.id
    }

    fn records(dataset: &FallbackDataset) -> &[Student] {
        &dataset.students
    }

    fn assemble(dto: CreateStudentDto) -> Student {
        dto.into_student(StudentId::generate())
    }

    fn merge(entity: Student, dto: UpdateStudentDto) -> Student {
        entity.apply(dto)
    }
}

impl Resource for Teachers {
    type Id = TeacherId;
    type Entity = Teacher;
    type Create = CreateTeacherDto;
    type Update = UpdateTeacherDto;

    const PATH: &'static str = "teachers";
    const NAME: &'static str = "Teacher";
    const STRICT_OFFLINE_DELETE: bool = false;

    fn id(entity: &Teacher) -> &TeacherId {
        &entity.id
    }

    fn records(dataset: &FallbackDataset) -> &[Teacher] {
        &dataset.teachers
    }

    fn assemble(dto: CreateTeacherDto) -> Teacher {
        dto.into_teacher(TeacherId::generate())
    }

    fn merge(entity: Teacher, dto: UpdateTeacherDto) -> Teacher {
        entity.apply(dto)
    }
}

impl Resource for Classes {
    type Id = ClassId;
    type Entity = Class;
    type Create = CreateClassDto;
    type Update = UpdateClassDto;

    const PATH: &'static str = "classes";
    const NAME: &'static str = "Class";
    const STRICT_OFFLINE_DELETE: bool = true;

    fn id(entity: &Class) -> &ClassId {
        &entity.id
    }

    fn records(dataset: &FallbackDataset) -> &[Class] {
        &dataset.classes
    }

    fn assemble(dto: CreateClassDto) -> Class {
        dto.into_class(ClassId::generate())
    }

    fn merge(entity: Class, dto: UpdateClassDto) -> Class {
        entity.apply(dto)
    }

    fn list_latency(latency: &SimulatedLatency) -> Duration {
        latency.list_classes
    }
}
