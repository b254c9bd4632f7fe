#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Resume as edited in the form and sent over the wire.
///
/// Every field defaults to empty, so partial documents deserialize; type
/// mismatches on the fields that are present still fail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub year: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    Name,
    Email,
    Phone,
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Company,
    Position,
    Duration,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    Institution,
    Degree,
    Year,
    Description,
}

impl PersonalInfo {
    pub fn field_mut(&mut self, field: PersonalField) -> &mut String {
        match field {
            PersonalField::Name => &mut self.name,
            PersonalField::Email => &mut self.email,
            PersonalField::Phone => &mut self.phone,
            PersonalField::Location => &mut self.location,
        }
    }
}

impl Experience {
    /// An entry with the given id and every other field empty.
    pub fn blank(id: String) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn field_mut(&mut self, field: ExperienceField) -> &mut String {
        match field {
            ExperienceField::Company => &mut self.company,
            ExperienceField::Position => &mut self.position,
            ExperienceField::Duration => &mut self.duration,
            ExperienceField::Description => &mut self.description,
        }
    }
}

impl Education {
    /// An entry with the given id and every other field empty.
    pub fn blank(id: String) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn field_mut(&mut self, field: EducationField) -> &mut String {
        match field {
            EducationField::Institution => &mut self.institution,
            EducationField::Degree => &mut self.degree,
            EducationField::Year => &mut self.year,
            EducationField::Description => &mut self.description,
        }
    }
}
