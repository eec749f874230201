//! CPE 파싱/직렬화 에러 타입
//!
//! [`CpeError`]는 두 방언의 파싱 경로와 직렬화 경로에서 발생할 수 있는
//! 모든 에러를 나타냅니다. 모든 실패는 입력에 대한 결정적 함수이며,
//! 부분 레코드 복구나 재시도 없이 즉시 반환됩니다.
//!
//! # 에러 카테고리
//!
//! - **방언 판별**: `EmptyInput`, `Nonstandard`, `InputTooLarge`
//! - **CPE 2.2**: `InvalidSegmentCount`, `InvalidPart`, `EmptyEdition`,
//!   `InvalidPackedEdition`
//! - **CPE 2.3**: `InvalidFormattedString`, `TooFewComponents`,
//!   `TooManyComponents`, `InvalidPart`
//! - **직렬화**: `EmptyRecord`, `InvalidPart`
//! - **설정**: `Config`

/// CPE 도메인 에러
///
/// 잘못된 형식의 입력(빈 문자열, 필드 수 불일치, 잘못된 part 코드)은
/// 모두 이 타입으로 반환되며 panic을 일으키지 않습니다.
#[derive(Debug, thiserror::Error)]
pub enum CpeError {
    /// 입력 문자열이 비어 있음
    #[error("cpe string is empty")]
    EmptyInput,

    /// 입력이 CPE 2.2 / 2.3 어느 접두사와도 일치하지 않음
    #[error("cpe string conforms to neither the 2.2 uri form nor the 2.3 formatted string form")]
    Nonstandard,

    /// part 값이 닫힌 집합 {a, o, h}에 속하지 않거나 형식이 잘못됨
    #[error("invalid cpe part: '{value}' (expected one of: a, o, h)")]
    InvalidPart {
        /// 거부된 part 값
        value: String,
    },

    /// CPE 2.2 콜론 세그먼트 수가 허용 범위를 벗어남
    #[error("invalid cpe 2.2 uri: {count} segments (expected 2-8)")]
    InvalidSegmentCount {
        /// 실제 세그먼트 수
        count: usize,
    },

    /// CPE 2.3 필수 위치에 토큰이 없음
    #[error("too few components: missing '{field}'")]
    TooFewComponents {
        /// 비어 있는 첫 번째 필드명
        field: &'static str,
    },

    /// CPE 2.3 필드가 11개를 초과함
    #[error("too many components: expected exactly 11")]
    TooManyComponents,

    /// edition 세그먼트가 존재하지만 값이 비어 있음
    #[error("edition segment is present but empty")]
    EmptyEdition,

    /// 패킹된 edition의 서브 필드가 5개를 초과함
    #[error("invalid packed edition: {count} sub-fields (max 5)")]
    InvalidPackedEdition {
        /// 실제 서브 필드 수
        count: usize,
    },

    /// `cpe:2.3:` 접두사가 없는 입력이 2.3 경로로 전달됨
    #[error("invalid cpe 2.3 value: '{value}'")]
    InvalidFormattedString {
        /// 원본 입력
        value: String,
    },

    /// 모든 필드가 빈 레코드를 직렬화하려 함
    #[error("cpe record is empty")]
    EmptyRecord,

    /// 입력 크기 초과
    #[error("input too large: {size} bytes (max: {max})")]
    InputTooLarge {
        /// 실제 입력 크기 (바이트)
        size: usize,
        /// 최대 허용 크기 (바이트)
        max: usize,
    },

    /// 설정 에러
    #[error("config error: {field}: {reason}")]
    Config {
        /// 설정 필드명
        field: String,
        /// 에러 사유
        reason: String,
    },
}
