use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::models::resume::{Education, Experience, PersonalInfo, ResumeData};

/// A file handed to the editor's upload action.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Bytes,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unsupported document type: {0}")]
    Unsupported(String),
}

/// Turns an uploaded document into resume data. Implement this to plug in
/// real PDF/DOCX extraction without touching the editor.
#[async_trait]
pub trait DocumentParser: Send + Sync {
    async fn parse(&self, file: &UploadedFile) -> Result<ResumeData, ParseError>;
}

/// Placeholder parser: ignores the file contents and always yields
/// `sample_resume()`.
pub struct SampleDocumentParser;

#[async_trait]
impl DocumentParser for SampleDocumentParser {
    async fn parse(&self, _file: &UploadedFile) -> Result<ResumeData, ParseError> {
        Ok(sample_resume())
    }
}

pub fn sample_resume() -> ResumeData {
    ResumeData {
        personal_info: PersonalInfo {
            name: "John Doe".to_string(),
            email: "john.doe@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
        },
        summary: "Experienced software developer with 5+ years of experience in full-stack development, specializing in React, Node.js, and cloud technologies.".to_string(),
        experience: vec![
            Experience {
                id: "1".to_string(),
                company: "Tech Corp".to_string(),
                position: "Senior Software Engineer".to_string(),
                duration: "2021 - Present".to_string(),
                description: "Led development of web applications using React and Node.js. Managed a team of 3 developers and improved system performance by 40%.".to_string(),
            },
            Experience {
                id: "2".to_string(),
                company: "StartupXYZ".to_string(),
                position: "Full Stack Developer".to_string(),
                duration: "2019 - 2021".to_string(),
                description: "Developed and maintained multiple web applications. Implemented CI/CD pipelines and reduced deployment time by 60%.".to_string(),
            },
        ],
        education: vec![Education {
            id: "1".to_string(),
            institution: "University of California".to_string(),
            degree: "Bachelor of Science in Computer Science".to_string(),
            year: "2019".to_string(),
            description: "Graduated Magna Cum Laude. Relevant coursework: Data Structures, Algorithms, Software Engineering.".to_string(),
        }],
        skills: ["JavaScript", "React", "Node.js", "Python", "AWS", "Docker", "MongoDB", "PostgreSQL"]
            .into_iter()
            .map(String::from)
            .collect(),
    }
}
