//! Mentor roster.

#[cfg(test)]
#[path = "mentors_test.rs"]
mod mentors_test;

use super::{BADGE_GREEN, BADGE_RED};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MentorStatus {
    Active,
    Inactive,
}

impl MentorStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "在职",
            Self::Inactive => "离职",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Active => BADGE_GREEN,
            Self::Inactive => BADGE_RED,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mentor {
    pub id: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub department: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub specialization: &'static str,
    pub student_count: u32,
    pub status: MentorStatus,
}

pub const MENTORS: &[Mentor] = &[
    Mentor {
        id: "1",
        name: "张教授",
        title: "教授",
        department: "计算机科学系",
        email: "zhang@example.com",
        phone: "13800138000",
        specialization: "人工智能",
        student_count: 5,
        status: MentorStatus::Active,
    },
    Mentor {
        id: "2",
        name: "李教授",
        title: "副教授",
        department: "软件工程系",
        email: "li@example.com",
        phone: "13800138001",
        specialization: "软件工程",
        student_count: 3,
        status: MentorStatus::Active,
    },
];
