/// Vacancy and salary figures of one programming language on one job board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStats {
    pub language: String,
    /// Total reported by the job board, not limited to the fetched pages
    pub vacancies_found: u64,
    /// Fetched vacancies with an estimable salary
    pub vacancies_processed: u64,
    /// Mean of the estimates, `None` when no vacancy could be processed
    pub average_salary: Option<u64>,
}

impl LanguageStats {
    pub fn new(language: String, vacancies_found: u64, salaries: &[f64]) -> Self {
        let average_salary = if salaries.is_empty() {
            None
        } else {
            let mean = salaries.iter().sum::<f64>() / salaries.len() as f64;
            Some(mean as u64)
        };
        Self {
            language,
            vacancies_found,
            vacancies_processed: salaries.len() as u64,
            average_salary,
        }
    }
}

/// Language stats in the order the languages were requested
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsTable {
    rows: Vec<LanguageStats>,
}

impl StatsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stats: LanguageStats) {
        self.rows.push(stats);
    }

    pub fn get(&self, language: &str) -> Option<&LanguageStats> {
        self.rows.iter().find(|stats| stats.language == language)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageStats> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<LanguageStats> for StatsTable {
    fn from_iter<T: IntoIterator<Item = LanguageStats>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
