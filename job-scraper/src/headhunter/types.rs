use serde::{Deserialize, Serialize};

/// Node of the area tree, countries hold their regions and cities in `areas`
#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct Area {
    pub(crate) id: String,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) areas: Vec<Area>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Salary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Vacancy {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub salary: Option<Salary>,
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct VacanciesPage {
    pub(crate) items: Vec<Vacancy>,
    pub(crate) found: u64,
    pub(crate) pages: u32,
}
