//! 도메인 타입 -- CPE 레코드, part 분류, 방언 구분
//!
//! [`Cpe`]는 두 파싱 경로가 공통으로 생성하는 구조화된 엔티티입니다.
//! JSON 태깅은 serde derive 속성으로 처리하여 별도의 직렬화용 타입을
//! 두지 않습니다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CpeError;

/// CPE part 분류 (제품 종류)
///
/// 닫힌 집합 {a, o, h}에 대한 전사 매핑을 제공합니다. 와일드카드 `*`와
/// not-applicable `-`는 일반 필드 값으로는 유효하지만 part 검증 단계에서는
/// 세 가지 구체 종류만 허용됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// 애플리케이션 (`a`)
    Application,
    /// 운영체제 (`o`)
    OperatingSystem,
    /// 하드웨어 장치 (`h`)
    Hardware,
}

impl Part {
    /// part 코드 문자열을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Application => "a",
            Self::OperatingSystem => "o",
            Self::Hardware => "h",
        }
    }

    /// 소문자 part 코드에서 분류를 파싱합니다 (대소문자 구분).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "a" => Some(Self::Application),
            "o" => Some(Self::OperatingSystem),
            "h" => Some(Self::Hardware),
            _ => None,
        }
    }

    /// 주어진 문자열이 유효한 part 코드인지 확인합니다.
    pub fn is_valid_code(code: &str) -> bool {
        Self::from_code(code).is_some()
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Part {
    type Err = CpeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| CpeError::InvalidPart {
            value: s.to_owned(),
        })
    }
}

/// CPE 텍스트 방언
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// CPE 2.2 URI 형식 (`cpe:/`)
    Uri,
    /// CPE 2.3 formatted string 형식 (`cpe:2.3:`)
    FormattedString,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uri => write!(f, "2.2"),
            Self::FormattedString => write!(f, "2.3"),
        }
    }
}

/// CPE 레코드
///
/// 11개의 독립적으로 선택적인 문자열 필드를 가집니다. 각 필드는 빈
/// 문자열일 수 있고, 와일드카드 `*`나 not-applicable `-`, escape된
/// 텍스트를 담을 수 있습니다. 레코드는 한 번의 파싱 호출로 채워진 뒤
/// 호출자 소유의 불변 데이터로 취급됩니다.
///
/// `swEdition` 이하 4개 필드는 CPE 2.3 고유 필드이며, CPE 2.2에서는
/// 패킹된 edition을 통해서만 채워집니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cpe {
    /// part 코드 (`a`/`o`/`h`)
    pub part: String,
    /// 벤더명
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vendor: String,
    /// 제품명
    #[serde(skip_serializing_if = "String::is_empty")]
    pub product: String,
    /// 버전
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
    /// 업데이트/패치 수준
    #[serde(skip_serializing_if = "String::is_empty")]
    pub update: String,
    /// 에디션
    #[serde(skip_serializing_if = "String::is_empty")]
    pub edition: String,
    /// 언어 태그
    #[serde(skip_serializing_if = "String::is_empty")]
    pub language: String,
    /// 소프트웨어 에디션 (CPE 2.3)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sw_edition: String,
    /// 대상 소프트웨어 환경 (CPE 2.3)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_sw: String,
    /// 대상 하드웨어 환경 (CPE 2.3)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_hw: String,
    /// 기타 (CPE 2.3)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub other: String,
}

impl Cpe {
    /// 모든 필드가 빈 레코드를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 11개 필드가 모두 비어 있는지 확인합니다.
    ///
    /// 제로 값 레코드와 파싱 결과를 구별하는 용도이며, 파싱 성공 여부는
    /// 호출자가 에러 결과로 판단합니다.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// part 필드를 [`Part`] 분류로 해석합니다.
    pub fn part_kind(&self) -> Option<Part> {
        Part::from_code(&self.part)
    }

    /// (필드명, 값) 쌍을 위치 순서대로 반환합니다.
    ///
    /// 필드명은 JSON 태그와 동일한 표기를 사용합니다.
    pub fn fields(&self) -> [(&'static str, &str); 11] {
        [
            ("part", &self.part),
            ("vendor", &self.vendor),
            ("product", &self.product),
            ("version", &self.version),
            ("update", &self.update),
            ("edition", &self.edition),
            ("language", &self.language),
            ("swEdition", &self.sw_edition),
            ("targetSw", &self.target_sw),
            ("targetHw", &self.target_hw),
            ("other", &self.other),
        ]
    }
}

impl fmt::Display for Cpe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cpe(part={}, vendor={}, product={}, version={})",
            self.part, self.vendor, self.product, self.version,
        )
    }
}
