use std::{fmt, str::FromStr};

use crate::school_error::{ConfigurationError, SchoolError};

/// Category of school, as the portal knows it (`schulCrseScCode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchoolType {
    /// Kindergarten attached to an elementary school.
    Kindergarten,
    Elementary,
    Middle,
    High,
}

impl SchoolType {
    pub const ALL: [SchoolType; 4] = [
        SchoolType::Kindergarten,
        SchoolType::Elementary,
        SchoolType::Middle,
        SchoolType::High,
    ];

    pub fn portal_code(self) -> &'static str {
        match self {
            SchoolType::Kindergarten => "1",
            SchoolType::Elementary => "2",
            SchoolType::Middle => "3",
            SchoolType::High => "4",
        }
    }

    fn name(self) -> &'static str {
        match self {
            SchoolType::Kindergarten => "kindergarten",
            SchoolType::Elementary => "elementary",
            SchoolType::Middle => "middle",
            SchoolType::High => "high",
        }
    }
}

impl fmt::Display for SchoolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchoolType {
    type Err = SchoolError;

    // Accepts the catalog name in any case, or the bare portal code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SchoolType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(wanted) || t.portal_code() == wanted)
            .ok_or_else(|| ConfigurationError::UnknownSchoolType(s.to_string()).into())
    }
}

/// Regional office of education. Each one serves the portal from its own host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Seoul,
    Incheon,
    Busan,
    Gwangju,
    Daejeon,
    Daegu,
    Sejong,
    Ulsan,
    Gyeonggi,
    Gangwon,
    Chungbuk,
    Chungnam,
    Gyeongbuk,
    Gyeongnam,
    Jeonbuk,
    Jeonnam,
    Jeju,
}

impl Region {
    pub const ALL: [Region; 17] = [
        Region::Seoul,
        Region::Incheon,
        Region::Busan,
        Region::Gwangju,
        Region::Daejeon,
        Region::Daegu,
        Region::Sejong,
        Region::Ulsan,
        Region::Gyeonggi,
        Region::Gangwon,
        Region::Chungbuk,
        Region::Chungnam,
        Region::Gyeongbuk,
        Region::Gyeongnam,
        Region::Jeonbuk,
        Region::Jeonnam,
        Region::Jeju,
    ];

    pub fn host(self) -> &'static str {
        match self {
            Region::Seoul => "stu.sen.go.kr",
            Region::Incheon => "stu.ice.go.kr",
            Region::Busan => "stu.pen.go.kr",
            Region::Gwangju => "stu.gen.go.kr",
            Region::Daejeon => "stu.dje.go.kr",
            Region::Daegu => "stu.dge.go.kr",
            Region::Sejong => "stu.sje.go.kr",
            Region::Ulsan => "stu.use.go.kr",
            Region::Gyeonggi => "stu.goe.go.kr",
            Region::Gangwon => "stu.kwe.go.kr",
            Region::Chungbuk => "stu.cbe.go.kr",
            Region::Chungnam => "stu.cne.go.kr",
            Region::Gyeongbuk => "stu.gbe.go.kr",
            Region::Gyeongnam => "stu.gne.go.kr",
            Region::Jeonbuk => "stu.jbe.go.kr",
            Region::Jeonnam => "stu.jne.go.kr",
            Region::Jeju => "stu.jje.go.kr",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Region::Seoul => "seoul",
            Region::Incheon => "incheon",
            Region::Busan => "busan",
            Region::Gwangju => "gwangju",
            Region::Daejeon => "daejeon",
            Region::Daegu => "daegu",
            Region::Sejong => "sejong",
            Region::Ulsan => "ulsan",
            Region::Gyeonggi => "gyeonggi",
            Region::Gangwon => "gangwon",
            Region::Chungbuk => "chungbuk",
            Region::Chungnam => "chungnam",
            Region::Gyeongbuk => "gyeongbuk",
            Region::Gyeongnam => "gyeongnam",
            Region::Jeonbuk => "jeonbuk",
            Region::Jeonnam => "jeonnam",
            Region::Jeju => "jeju",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = SchoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigurationError::UnknownRegion(s.to_string()).into())
    }
}

/// Which portal page a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Meal,
    Calendar,
}

impl PageKind {
    pub fn path(self) -> &'static str {
        match self {
            PageKind::Meal => "sts_sci_md00_001.do",
            PageKind::Calendar => "sts_sci_sf01_001.do",
        }
    }
}

impl FromStr for PageKind {
    type Err = SchoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("meal") {
            Ok(PageKind::Meal)
        } else if s.eq_ignore_ascii_case("calendar") {
            Ok(PageKind::Calendar)
        } else {
            Err(SchoolError::UnknownKind(s.to_string()))
        }
    }
}
