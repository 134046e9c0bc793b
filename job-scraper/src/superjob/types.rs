use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct Town {
    pub(crate) id: u64,
    pub(crate) title: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct Towns {
    pub(crate) objects: Vec<Town>,
}

/// Salary bounds of 0 mean the employer left them out
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Vacancy {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub profession: String,
    pub payment_from: Option<f64>,
    pub payment_to: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct VacanciesPage {
    pub(crate) objects: Vec<Vacancy>,
    pub(crate) total: u64,
    pub(crate) more: bool,
}
