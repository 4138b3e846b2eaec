//! Footwear legality by occasion and condition grading

use crate::models::{Occasion, Severity};

#[derive(Debug)]
pub struct FootwearRules {
    pub allowed: &'static [&'static str],
    pub forbidden: &'static [&'static str],
    pub notes: &'static str,
}

static ETHNIC_FORMAL: FootwearRules = FootwearRules {
    allowed: &["mojaris", "juttis", "kolhapuris formal", "leather oxfords plain neutral"],
    forbidden: &["sneakers", "sports sandals", "rubber chappals", "sport shoes", "trainers"],
    notes: "Footwear must speak the same style language as the sherwani or bandhgala.",
};

static INDIAN_CASUAL: FootwearRules = FootwearRules {
    allowed: &["kolhapuris", "loafers", "clean white sneakers", "leather sandals"],
    forbidden: &["formal black oxfords", "sports shoes"],
    notes: "Clean white sneakers are fine with an everyday kurta.",
};

static WESTERN_FORMAL: FootwearRules = FootwearRules {
    allowed: &["oxford", "derby", "monk strap"],
    forbidden: &["loafers", "sneakers", "suede shoes", "sport shoes", "chappals"],
    notes: "Must be black or dark brown, polished. Suede is not formal.",
};

static BUSINESS_CASUAL: FootwearRules = FootwearRules {
    allowed: &["loafers", "clean leather sneakers", "chelsea boots", "derby"],
    forbidden: &["sports shoes", "rubber sandals", "flip flops"],
    notes: "",
};

static SMART_CASUAL: FootwearRules = FootwearRules {
    allowed: &["loafers", "clean leather sneakers", "chelsea boots", "derby", "brogues"],
    forbidden: &["sports shoes", "rubber sandals"],
    notes: "",
};

static STREETWEAR: FootwearRules = FootwearRules {
    allowed: &["sneakers", "chunky trainers", "clean low-tops"],
    forbidden: &["formal oxfords", "mojaris", "dress shoes"],
    notes: "Dirty sneakers undermine the entire look.",
};

static PARTY: FootwearRules = FootwearRules {
    allowed: &["loafers", "chelsea boots", "clean leather sneakers", "dress shoes"],
    forbidden: &["sports shoes", "rubber sandals", "old worn sneakers"],
    notes: "",
};

static CASUAL: FootwearRules = FootwearRules {
    allowed: &["sneakers", "loafers", "sandals", "kolhapuris", "chappals"],
    forbidden: &[],
    notes: "Most footwear works casually; condition still matters.",
};

static TRAVEL: FootwearRules = FootwearRules {
    allowed: &["sneakers", "loafers", "comfortable sandals", "chelsea boots"],
    forbidden: &["formal dress shoes"],
    notes: "",
};

static GYM: FootwearRules = FootwearRules {
    allowed: &["sport shoes", "trainers", "running shoes"],
    forbidden: &["loafers", "dress shoes", "sandals", "mojaris"],
    notes: "",
};

static BEACH: FootwearRules = FootwearRules {
    allowed: &["sandals", "flip flops"],
    forbidden: &["dress shoes", "boots"],
    notes: "",
};

static FESTIVAL: FootwearRules = FootwearRules {
    allowed: &["kolhapuris", "juttis", "sneakers", "sandals"],
    forbidden: &[],
    notes: "Color and print matter more than footwear at festivals.",
};

static LOUNGE: FootwearRules = FootwearRules {
    allowed: &["slippers", "sandals", "slides", "loafers"],
    forbidden: &["formal dress shoes"],
    notes: "",
};

static ETHNIC_FUSION: FootwearRules = FootwearRules {
    allowed: &["loafers", "kolhapuris", "clean sneakers", "leather sandals"],
    forbidden: &["formal black oxfords", "sports shoes", "rubber chappals"],
    notes: "",
};

pub fn rules(occasion: Occasion) -> &'static FootwearRules {
    match occasion {
        Occasion::IndianFormal | Occasion::WeddingGuestIndian => &ETHNIC_FORMAL,
        Occasion::IndianCasual => &INDIAN_CASUAL,
        Occasion::WesternBusinessFormal => &WESTERN_FORMAL,
        Occasion::WesternBusinessCasual => &BUSINESS_CASUAL,
        Occasion::SmartCasual => &SMART_CASUAL,
        Occasion::WesternStreetwear => &STREETWEAR,
        Occasion::Party => &PARTY,
        Occasion::Casual => &CASUAL,
        Occasion::Travel => &TRAVEL,
        Occasion::Gym => &GYM,
        Occasion::Beach => &BEACH,
        Occasion::Festival => &FESTIVAL,
        Occasion::Lounge => &LOUNGE,
        Occasion::EthnicFusion => &ETHNIC_FUSION,
    }
}

/// Forbidden entry the footwear type falls under, if any
pub fn forbidden_entry(footwear_type: &str, occasion: Occasion) -> Option<&'static str> {
    let kind = footwear_type.trim().to_lowercase();
    if kind.is_empty() {
        return None;
    }
    rules(occasion)
        .forbidden
        .iter()
        .copied()
        .find(|f| kind.contains(f))
}

/// Severity and care advice for a footwear condition reading
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionGrade {
    pub severity: Option<Severity>,
    pub issue: &'static str,
    pub care_note: &'static str,
}

const FINE_CONDITIONS: &[&str] = &["clean", "good", "polished", "new", "excellent", "well maintained"];

static CONDITION_TABLE: &[(&str, Severity, &str, &str)] = &[
    (
        "sole peeling",
        Severity::Critical,
        "Peeling sole is immediately visible and damages the overall impression.",
        "Replace immediately; cobbler repair may not be viable at this stage.",
    ),
    (
        "worn out",
        Severity::Critical,
        "Worn-out shoes signal a lack of investment in the overall look.",
        "Replace this pair; they are past the point of repair.",
    ),
    (
        "dirty",
        Severity::Critical,
        "Dirty shoes undermine the entire look regardless of the outfit.",
        "Clean thoroughly before wearing again.",
    ),
    (
        "yellowed sole",
        Severity::Moderate,
        "Yellowed sole reads as old and unmaintained.",
        "Use sole whitener, or replace if yellowing is severe.",
    ),
    (
        "scuffed",
        Severity::Moderate,
        "Visibly scuffed leather lowers the quality signal of the whole outfit.",
        "Polish before next wear, or take to a cobbler this week.",
    ),
];

/// Grade a footwear condition; unrecognized non-fine readings count as moderate
pub fn grade_condition(condition: &str) -> ConditionGrade {
    let c = condition.trim().to_lowercase();
    if c.is_empty() || FINE_CONDITIONS.iter().any(|f| c == *f) {
        return ConditionGrade {
            severity: None,
            issue: "",
            care_note: "",
        };
    }
    if let Some((_, severity, issue, care_note)) = CONDITION_TABLE
        .iter()
        .find(|(key, ..)| c.contains(key))
    {
        return ConditionGrade {
            severity: Some(*severity),
            issue,
            care_note,
        };
    }
    ConditionGrade {
        severity: Some(Severity::Moderate),
        issue: "Footwear condition looks below par for the outfit.",
        care_note: "Clean and polish, or rotate in a fresher pair.",
    }
}

/// Shoes a trouser rules out, judged from its type and fit text
pub fn forbidden_with_trouser(trouser: &str) -> &'static [&'static str] {
    let trouser = trouser.to_lowercase();
    if trouser.contains("formal tailored") {
        &["loafers", "sneakers"]
    } else if trouser.contains("cargo") {
        &["oxford", "derby", "monk strap"]
    } else {
        &[]
    }
}

/// Shoes that pair with a trouser, judged from its type and fit text
pub fn pairs_with_trouser(fit: &str) -> &'static [&'static str] {
    let fit = fit.to_lowercase();
    if fit.contains("formal tailored") {
        &["oxford", "derby"]
    } else if fit.contains("cargo") {
        &["clean sneakers", "chunky sneakers", "chelsea boots"]
    } else if fit.contains("wide") || fit.contains("relaxed") {
        &["chunky sneakers", "chelsea boots", "brogues"]
    } else if fit.contains("regular") {
        &["loafers", "brogues", "clean sneakers", "oxford", "derby"]
    } else {
        &["loafers", "derbies", "clean sneakers", "chelsea boots"]
    }
}
