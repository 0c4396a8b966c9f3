//! Graduate student roster.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use super::{BADGE_BLUE, BADGE_GREEN, BADGE_RED};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudentStatus {
    Active,
    Graduated,
    Suspended,
}

impl StudentStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "在读",
            Self::Graduated => "已毕业",
            Self::Suspended => "休学",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Active => BADGE_GREEN,
            Self::Graduated => BADGE_BLUE,
            Self::Suspended => BADGE_RED,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Student {
    pub id: &'static str,
    pub name: &'static str,
    pub student_id: &'static str,
    pub grade: &'static str,
    pub major: &'static str,
    pub mentor: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub research_topic: &'static str,
    pub status: StudentStatus,
    pub gpa: f32,
}

impl Student {
    /// GPA with one decimal, as shown in the table.
    pub fn gpa_display(&self) -> String {
        format!("{:.1}", self.gpa)
    }
}

pub const STUDENTS: &[Student] = &[
    Student {
        id: "1",
        name: "王小明",
        student_id: "2023001",
        grade: "研一",
        major: "计算机科学",
        mentor: "张教授",
        email: "xiaoming@example.com",
        phone: "13800138000",
        research_topic: "机器学习在自然语言处理中的应用",
        status: StudentStatus::Active,
        gpa: 3.8,
    },
    Student {
        id: "2",
        name: "李小华",
        student_id: "2023002",
        grade: "研二",
        major: "软件工程",
        mentor: "李教授",
        email: "xiaohua@example.com",
        phone: "13800138001",
        research_topic: "分布式系统性能优化",
        status: StudentStatus::Active,
        gpa: 3.9,
    },
];
