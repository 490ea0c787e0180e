use crate::{
    catalog::{PageKind, Region, SchoolType},
    school_error::{ConfigurationError, SchoolError},
    text_manipulators::month_format,
};

/// One school on the portal. Only [`SchoolBuilder::build`] produces it, and it
/// has no setters, so a `School` is always complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct School {
    school_type: SchoolType,
    region: Region,
    code: String,
}

impl School {
    pub fn new(
        school_type: SchoolType,
        region: Region,
        code: impl Into<String>,
    ) -> Result<Self, SchoolError> {
        SchoolBuilder::new()
            .school_type(school_type)
            .region(region)
            .code(code)
            .build()
    }

    pub fn builder() -> SchoolBuilder {
        SchoolBuilder::new()
    }

    pub fn school_type(&self) -> SchoolType {
        self.school_type
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// URL for `kind` ("meal" / "calendar", any case). The month goes through
    /// [`month_format`] and is not range checked here.
    pub fn build_url(
        &self,
        kind: &str,
        year: Option<i32>,
        month: Option<u32>,
    ) -> Result<String, SchoolError> {
        let kind = kind.parse::<PageKind>()?;
        Ok(self.url_for(kind, year, month))
    }

    pub fn url_for(&self, kind: PageKind, year: Option<i32>, month: Option<u32>) -> String {
        let school_type = self.school_type.portal_code();
        let year = year.map(|y| y.to_string()).unwrap_or_default();
        let month = month.map(month_format).unwrap_or_default();
        // The portal wants this exact parameter order, trailing `&` included.
        format!(
            "https://{host}/{path}?schulCode={code}&schulCrseScCode={school_type}&schulKndScCode=0{school_type}&ay={year}&mm={month}&",
            host = self.region.host(),
            path = kind.path(),
            code = self.code,
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct SchoolBuilder {
    school_type: Option<Result<SchoolType, String>>,
    region: Option<Result<Region, String>>,
    code: Option<String>,
}

impl SchoolBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn school_type(mut self, school_type: SchoolType) -> Self {
        self.school_type = Some(Ok(school_type));
        self
    }

    /// Resolved against the catalog when [`SchoolBuilder::build`] runs.
    pub fn school_type_name(mut self, name: impl Into<String>) -> Self {
        self.school_type = Some(Err(name.into()));
        self
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(Ok(region));
        self
    }

    pub fn region_name(mut self, name: impl Into<String>) -> Self {
        self.region = Some(Err(name.into()));
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn build(self) -> Result<School, SchoolError> {
        let school_type = match self.school_type {
            None => return Err(ConfigurationError::MissingField("school type").into()),
            Some(Ok(t)) => t,
            Some(Err(name)) if name.trim().is_empty() => {
                return Err(ConfigurationError::MissingField("school type").into());
            }
            Some(Err(name)) => name.parse()?,
        };
        let region = match self.region {
            None => return Err(ConfigurationError::MissingField("region").into()),
            Some(Ok(r)) => r,
            Some(Err(name)) if name.trim().is_empty() => {
                return Err(ConfigurationError::MissingField("region").into());
            }
            Some(Err(name)) => name.parse()?,
        };
        let code = match self.code {
            Some(code) if !code.trim().is_empty() => code,
            _ => return Err(ConfigurationError::MissingField("school code").into()),
        };
        Ok(School {
            school_type,
            region,
            code,
        })
    }
}
