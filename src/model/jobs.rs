//! Jobs Model
//!
//! Recommended jobs for individuals.

use crate::api::Job;
use crate::logic::navigation::clamp_selection;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobsModel {
    pub jobs: Vec<Job>,
    pub selected: Option<usize>,
    /// Details view open for the selected job
    pub details_open: bool,
    pub loading: bool,
    pub loaded: bool,
}

impl JobsModel {
    pub fn load(&mut self, jobs: Vec<Job>) {
        self.selected = clamp_selection(self.selected, jobs.len());
        self.jobs = jobs;
        self.loading = false;
        self.loaded = true;
    }

    pub fn selected_job(&self) -> Option<&Job> {
        self.selected.and_then(|i| self.jobs.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn job(id: &str) -> Job {
        Job {
            id: id.to_string(),
            company_id: "c".to_string(),
            company_name: "Co".to_string(),
            title: "Role".to_string(),
            description: String::new(),
            location: "Remote".to_string(),
            salary: "$1".to_string(),
            skills: vec![],
            posted_date: NaiveDate::from_ymd_opt(2023, 10, 15).unwrap(),
            is_remote: true,
        }
    }

    #[test]
    fn test_load_selects_first_job() {
        let mut model = JobsModel::default();
        assert!(model.selected_job().is_none());

        model.load(vec![job("1"), job("2")]);
        assert_eq!(model.selected_job().map(|j| j.id.as_str()), Some("1"));

        model.selected = Some(1);
        model.load(vec![job("1")]);
        assert_eq!(model.selected, Some(0));
    }
}
