/// Separator between a main category and a subcategory in a category label.
pub(crate) const CATEGORY_SEPARATOR: &str = " > ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Category {
    pub name: &'static str,
    pub id: u32,
    pub subcategories: &'static [&'static str],
}

/// Main categories known to the article API, in display order.
pub(crate) const CATEGORIES: [Category; 6] = [
    Category {
        name: "소프트웨어 개발",
        id: 1,
        subcategories: &["프론트엔드", "백엔드", "모바일", "게임 개발"],
    },
    Category {
        name: "시스템 & 인프라",
        id: 2,
        subcategories: &["클라우드", "데브옵스", "네트워크", "보안"],
    },
    Category {
        name: "테크",
        id: 3,
        subcategories: &["AI", "블록체인", "IoT"],
    },
    Category {
        name: "디자인 & 아트",
        id: 4,
        subcategories: &["UI/UX", "그래픽", "일러스트"],
    },
    Category {
        name: "비즈니스",
        id: 5,
        subcategories: &["스타트업", "마케팅", "기획"],
    },
    Category {
        name: "기타",
        id: 6,
        subcategories: &["일상", "리뷰"],
    },
];

pub(crate) fn find_category(name: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.name == name)
}

/// Resolve a category label (`"Main"` or `"Main > Sub"`) to its API id.
///
/// Only the main segment is looked up. Unknown labels (including the empty
/// label) resolve to 0.
pub(crate) fn category_id(label: &str) -> u32 {
    let main = label.split(CATEGORY_SEPARATOR).next().unwrap_or_default();
    find_category(main).map(|c| c.id).unwrap_or(0)
}

pub(crate) fn category_label(main: &str, sub: Option<&str>) -> String {
    match sub {
        Some(sub) if !sub.is_empty() => format!("{main}{CATEGORY_SEPARATOR}{sub}"),
        _ => main.to_string(),
    }
}
