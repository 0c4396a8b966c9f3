//! Program-wide figures for the statistics page.
//!
//! Distributions render as bar rows; `bar_width_percent` scales each entry
//! against the largest one in its group.

#[cfg(test)]
#[path = "statistics_test.rs"]
mod statistics_test;

/// One overview card: headline total plus a labelled sub-count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overview {
    pub name: &'static str,
    pub total: u32,
    pub detail_label: &'static str,
    pub detail: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Distribution {
    pub title: &'static str,
    pub entries: &'static [(&'static str, u32)],
}

impl Distribution {
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    fn max(&self) -> u32 {
        self.entries.iter().map(|(_, n)| *n).max().unwrap_or(0)
    }

    /// Bar width for `value`, as a whole percentage of the largest entry.
    pub fn bar_width_percent(&self, value: u32) -> u32 {
        match self.max() {
            0 => 0,
            max => (value.min(max) * 100) / max,
        }
    }
}

pub const OVERVIEW: [Overview; 4] = [
    Overview { name: "导师总数", total: 20, detail_label: "在职", detail: 18 },
    Overview { name: "学生总数", total: 90, detail_label: "在读", detail: 85 },
    Overview { name: "任务总数", total: 150, detail_label: "已完成", detail: 100 },
    Overview { name: "会议总数", total: 80, detail_label: "待开", detail: 20 },
];

pub const MENTOR_DEPARTMENTS: Distribution = Distribution {
    title: "导师部门分布",
    entries: &[("计算机科学", 8), ("软件工程", 6), ("人工智能", 4), ("数据科学", 2)],
};

pub const STUDENT_GRADES: Distribution = Distribution {
    title: "学生年级分布",
    entries: &[("研一", 35), ("研二", 30), ("研三", 25)],
};

pub const MONTHLY_TASK_COMPLETION: Distribution = Distribution {
    title: "任务完成趋势",
    entries: &[("1月", 20), ("2月", 25), ("3月", 30), ("4月", 28), ("5月", 32), ("6月", 35)],
};

pub const MEETING_TYPES: Distribution = Distribution {
    title: "会议类型分布",
    entries: &[("研究会议", 30), ("进展汇报", 25), ("论文答辩", 15), ("学术讨论", 10)],
};

pub const DISTRIBUTIONS: [Distribution; 4] = [MENTOR_DEPARTMENTS, STUDENT_GRADES, MONTHLY_TASK_COMPLETION, MEETING_TYPES];
