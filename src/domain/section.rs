/// Dashboard sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionName {
    CspmExecutive,
    CwppDashboard,
    RegistryScan,
}

impl SectionName {
    pub const ALL: [SectionName; 3] = [
        SectionName::CspmExecutive,
        SectionName::CwppDashboard,
        SectionName::RegistryScan,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SectionName::CspmExecutive => "CSPM Executive Dashboard",
            SectionName::CwppDashboard => "CWPP Dashboard",
            SectionName::RegistryScan => "Registry Scan",
        }
    }

    pub fn next(&self) -> SectionName {
        match self {
            SectionName::CspmExecutive => SectionName::CwppDashboard,
            SectionName::CwppDashboard => SectionName::RegistryScan,
            SectionName::RegistryScan => SectionName::CspmExecutive,
        }
    }

    pub fn prev(&self) -> SectionName {
        match self {
            SectionName::CspmExecutive => SectionName::RegistryScan,
            SectionName::CwppDashboard => SectionName::CspmExecutive,
            SectionName::RegistryScan => SectionName::CwppDashboard,
        }
    }
}
