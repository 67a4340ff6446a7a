//! Category code tables used by the bgm.tv API.
//!
//! The remote API takes small integer codes; callers pass the human-readable
//! Chinese category names the site itself uses. Translation happens once at
//! the boundary, and each table has its own documented behavior for
//! unrecognized names (see the individual `filter` functions).

use crate::error::{BgmError, BgmResult};

/// Subject category (条目类型).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectType {
    Book,
    Anime,
    Music,
    Game,
    Real,
}

impl SubjectType {
    pub fn code(self) -> u8 {
        match self {
            SubjectType::Book => 1,
            SubjectType::Anime => 2,
            SubjectType::Music => 3,
            SubjectType::Game => 4,
            SubjectType::Real => 6,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "书籍" => Some(SubjectType::Book),
            "动漫" => Some(SubjectType::Anime),
            "音乐" => Some(SubjectType::Music),
            "游戏" => Some(SubjectType::Game),
            "三次元" => Some(SubjectType::Real),
            _ => None,
        }
    }
}

/// Collection (watch-status) category (收藏类型).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionType {
    Wish,
    Done,
    Doing,
    OnHold,
    Dropped,
}

impl CollectionType {
    pub fn code(self) -> u8 {
        match self {
            CollectionType::Wish => 1,
            CollectionType::Done => 2,
            CollectionType::Doing => 3,
            CollectionType::OnHold => 4,
            CollectionType::Dropped => 5,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "想看" => Some(CollectionType::Wish),
            "看过" => Some(CollectionType::Done),
            "在看" => Some(CollectionType::Doing),
            "搁置" => Some(CollectionType::OnHold),
            "抛弃" => Some(CollectionType::Dropped),
            _ => None,
        }
    }
}

/// Episode category (章节类型).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeType {
    MainStory,
    Special,
    Opening,
    Ending,
    Trailer,
    Mad,
    Other,
}

impl EpisodeType {
    pub fn code(self) -> u8 {
        match self {
            EpisodeType::MainStory => 0,
            EpisodeType::Special => 1,
            EpisodeType::Opening => 2,
            EpisodeType::Ending => 3,
            EpisodeType::Trailer => 4,
            EpisodeType::Mad => 5,
            EpisodeType::Other => 6,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "本篇" => Some(EpisodeType::MainStory),
            "特别篇" => Some(EpisodeType::Special),
            "OP" => Some(EpisodeType::Opening),
            "ED" => Some(EpisodeType::Ending),
            "预告/宣传/广告" => Some(EpisodeType::Trailer),
            "MAD" => Some(EpisodeType::Mad),
            "其他" => Some(EpisodeType::Other),
            _ => None,
        }
    }
}

/// Strict subject-type translation. Only the user-collections search uses
/// this path; an unrecognized name is rejected instead of widening the query.
pub(crate) fn subject_type_code(name: &str) -> BgmResult<u8> {
    SubjectType::from_name(name)
        .map(SubjectType::code)
        .ok_or_else(|| BgmError::InvalidParameter(format!("unknown subject type: {name}")))
}

/// Lenient subject-type translation: unrecognized names become 0, which the
/// API treats as "no type filter".
pub(crate) fn subject_type_filter(name: &str) -> u8 {
    SubjectType::from_name(name).map_or(0, SubjectType::code)
}

/// Lenient collection-type translation: unrecognized names become 0
/// ("no status filter").
pub(crate) fn collection_type_filter(name: &str) -> u8 {
    CollectionType::from_name(name).map_or(0, CollectionType::code)
}

/// Lenient episode-type translation: unrecognized names fall back to 0,
/// which is 本篇 (the main story), not "unfiltered".
pub(crate) fn episode_type_filter(name: &str) -> u8 {
    EpisodeType::from_name(name).map_or(0, EpisodeType::code)
}
