use std::sync::OnceLock;

use log::{debug, info};

use crate::{
    catalog::PageKind,
    fetcher::Fetcher,
    query::{MonthInput, QueryArgs, validate_date},
    school::{School, SchoolBuilder},
    school_error::{ConfigurationError, SchoolError},
};

/// Entry point for meal and calendar lookups of a single school.
///
/// The school is set exactly once, through [`SchoolPortal::init`] or
/// [`SchoolPortal::init_with`], and never changes afterwards. Every query
/// method takes `&self`, so one portal can serve many concurrent lookups.
pub struct SchoolPortal<M, C> {
    school: OnceLock<School>,
    meal_fetcher: M,
    calendar_fetcher: C,
}

impl<M, C> SchoolPortal<M, C> {
    pub fn new(meal_fetcher: M, calendar_fetcher: C) -> Self {
        Self {
            school: OnceLock::new(),
            meal_fetcher,
            calendar_fetcher,
        }
    }

    pub fn with_school(school: School, meal_fetcher: M, calendar_fetcher: C) -> Self {
        Self {
            school: OnceLock::from(school),
            meal_fetcher,
            calendar_fetcher,
        }
    }

    pub fn init(&self, school: School) -> Result<&School, SchoolError> {
        let code = school.code().to_string();
        self.school
            .set(school)
            .map_err(|_| self.already_initialized())?;
        info!("school {code} initialized");
        self.school()
    }

    /// Refuses a second initialization before even looking at `builder`.
    pub fn init_with(&self, builder: SchoolBuilder) -> Result<&School, SchoolError> {
        if self.school.get().is_some() {
            return Err(self.already_initialized());
        }
        self.init(builder.build()?)
    }

    pub fn school(&self) -> Result<&School, SchoolError> {
        self.school.get().ok_or(SchoolError::NotInitialized)
    }

    pub fn meal_fetcher(&self) -> &M {
        &self.meal_fetcher
    }

    pub fn calendar_fetcher(&self) -> &C {
        &self.calendar_fetcher
    }

    pub fn is_initialized(&self) -> bool {
        self.school.get().is_some()
    }

    pub fn build_url(
        &self,
        kind: &str,
        year: Option<i32>,
        month: Option<u32>,
    ) -> Result<String, SchoolError> {
        self.school()?.build_url(kind, year, month)
    }

    /// The URL [`SchoolPortal::get_meal`] or [`SchoolPortal::get_calendar`]
    /// would fetch, without fetching it.
    pub fn get_target_url(
        &self,
        kind: &str,
        year: Option<i32>,
        month: Option<u32>,
    ) -> Result<String, SchoolError> {
        let month = validate_date(year, month.map(MonthInput::from).as_ref())?;
        self.school()?.build_url(kind, year, month)
    }

    fn already_initialized(&self) -> SchoolError {
        let school_code = self
            .school
            .get()
            .map(|s| s.code().to_string())
            .unwrap_or_default();
        ConfigurationError::AlreadyInitialized { school_code }.into()
    }

    async fn dispatch<F>(
        &self,
        fetcher: &F,
        kind: PageKind,
        args: QueryArgs<F::Output>,
    ) -> Result<F::Output, SchoolError>
    where
        F: Fetcher,
        F::Output: Default,
    {
        let query = args.normalize()?;
        let url = self.school()?.url_for(kind, query.year, query.month);
        debug!("fetching {kind:?} page: {url}");
        fetcher
            .get_data(&url, query.default)
            .await
            .map_err(SchoolError::Fetch)
    }
}

impl<M, C> SchoolPortal<M, C>
where
    M: Fetcher,
    M::Output: Default,
{
    pub async fn get_meal(&self, args: QueryArgs<M::Output>) -> Result<M::Output, SchoolError> {
        self.dispatch(&self.meal_fetcher, PageKind::Meal, args)
            .await
    }
}

impl<M, C> SchoolPortal<M, C>
where
    C: Fetcher,
    C::Output: Default,
{
    pub async fn get_calendar(
        &self,
        args: QueryArgs<C::Output>,
    ) -> Result<C::Output, SchoolError> {
        self.dispatch(&self.calendar_fetcher, PageKind::Calendar, args)
            .await
    }
}
