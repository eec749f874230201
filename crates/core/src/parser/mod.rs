//! CPE 파서 -- 방언 판별과 두 파싱 경로
//!
//! [`parse`]는 입력 접두사로 방언을 판별한 뒤 해당 경로로 위임합니다.
//!
//! - `cpe:/` -- CPE 2.2 URI 경로 ([`uri`])
//! - `cpe:2.3:` -- CPE 2.3 formatted string 경로 ([`formatted`])
//!
//! 접두사 비교는 경계가 보장된 부분 문자열 비교입니다. 입력이 접두사보다
//! 짧으면 단순히 불일치로 처리합니다.
//!
//! # 사용 예시
//!
//! ```
//! use cpekit_core::{ParserConfig, parse, parse_with};
//!
//! let cpe = parse("cpe:/a:hiox_india:guest_book:4.0/").unwrap();
//! assert_eq!(cpe.product, "guest_book");
//!
//! // 접두사 대소문자 무시 옵션
//! let config = ParserConfig {
//!     ignore_prefix_case: true,
//!     ..Default::default()
//! };
//! let cpe = parse_with("CPE:/o:linux:linux_kernel", &config).unwrap();
//! assert_eq!(cpe.part, "o");
//! ```

mod formatted;
mod uri;

use crate::config::ParserConfig;
use crate::error::CpeError;
use crate::types::{Cpe, Dialect};

/// CPE 2.2 URI 형식 접두사
pub const URI_PREFIX: &str = "cpe:/";

/// CPE 2.3 formatted string 형식 접두사
pub const FORMATTED_PREFIX: &str = "cpe:2.3:";

/// 기본 설정으로 CPE 문자열을 파싱합니다.
///
/// 접두사 매칭은 참조 동작과 동일하게 대소문자를 구분합니다.
///
/// # Errors
///
/// 빈 입력은 `EmptyInput`, 어느 방언과도 일치하지 않는 입력은
/// `Nonstandard`, 그 외 방언별 파싱 실패는 해당 에러로 반환됩니다.
pub fn parse(input: &str) -> Result<Cpe, CpeError> {
    parse_with(input, &ParserConfig::default())
}

/// 주어진 설정으로 CPE 문자열을 파싱합니다.
pub fn parse_with(input: &str, config: &ParserConfig) -> Result<Cpe, CpeError> {
    let dialect = detect(input, config)?;
    tracing::debug!(dialect = %dialect, len = input.len(), "parsing cpe string");

    match dialect {
        Dialect::Uri => uri::parse(input),
        Dialect::FormattedString => formatted::parse(input, config),
    }
}

/// 입력 문자열의 방언을 판별합니다.
///
/// 파싱 없이 접두사 검사만 수행합니다.
pub fn detect(input: &str, config: &ParserConfig) -> Result<Dialect, CpeError> {
    if input.is_empty() {
        return Err(CpeError::EmptyInput);
    }
    if input.len() > config.max_input_len {
        return Err(CpeError::InputTooLarge {
            size: input.len(),
            max: config.max_input_len,
        });
    }

    if prefix_matches(input, URI_PREFIX, config.ignore_prefix_case) {
        Ok(Dialect::Uri)
    } else if prefix_matches(input, FORMATTED_PREFIX, config.ignore_prefix_case) {
        Ok(Dialect::FormattedString)
    } else {
        Err(CpeError::Nonstandard)
    }
}

/// 경계가 보장된 접두사 비교.
///
/// 입력이 접두사보다 짧거나 접두사 길이 위치가 문자 경계가 아니면
/// 불일치로 처리합니다.
pub(crate) fn prefix_matches(input: &str, prefix: &str, ignore_case: bool) -> bool {
    match input.get(..prefix.len()) {
        Some(head) if ignore_case => head.eq_ignore_ascii_case(prefix),
        Some(head) => head == prefix,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(parse(""), Err(CpeError::EmptyInput)));
    }

    #[test]
    fn nonstandard_prefix_is_rejected() {
        assert!(matches!(
            parse("wfn:[part=\"a\"]"),
            Err(CpeError::Nonstandard)
        ));
        assert!(matches!(parse("cpe:1.0:a:v"), Err(CpeError::Nonstandard)));
    }

    #[test]
    fn input_shorter_than_prefix_is_nonstandard() {
        // 접두사보다 짧은 입력은 경계 밖 접근 없이 불일치 처리
        assert!(matches!(parse("cpe"), Err(CpeError::Nonstandard)));
        assert!(matches!(parse("c"), Err(CpeError::Nonstandard)));
    }

    #[test]
    fn detect_distinguishes_dialects() {
        let config = ParserConfig::default();
        assert_eq!(
            detect("cpe:/a:vendor:product", &config).unwrap(),
            Dialect::Uri
        );
        assert_eq!(
            detect("cpe:2.3:a:v:p:1:*:*:*:*:*:*:*", &config).unwrap(),
            Dialect::FormattedString
        );
    }

    #[test]
    fn prefix_matching_is_case_sensitive_by_default() {
        assert!(matches!(
            parse("CPE:/a:vendor:product"),
            Err(CpeError::Nonstandard)
        ));
        assert!(matches!(
            parse("Cpe:2.3:a:v:p:1:*:*:*:*:*:*:*"),
            Err(CpeError::Nonstandard)
        ));
    }

    #[test]
    fn prefix_matching_honors_ignore_case_option() {
        let config = ParserConfig {
            ignore_prefix_case: true,
            ..Default::default()
        };

        let cpe = parse_with("CPE:/a:vendor:product", &config).unwrap();
        assert_eq!(cpe.vendor, "vendor");

        let cpe = parse_with("CPE:2.3:a:v:p:1:*:*:*:*:*:*:*", &config).unwrap();
        assert_eq!(cpe.product, "p");
    }

    #[test]
    fn oversized_input_is_rejected_before_dispatch() {
        let config = ParserConfig {
            max_input_len: 16,
            ..Default::default()
        };
        let long = format!("cpe:/a:{}", "v".repeat(100));
        assert!(matches!(
            parse_with(&long, &config),
            Err(CpeError::InputTooLarge { size: 107, max: 16 })
        ));
    }

    #[test]
    fn multibyte_head_does_not_panic() {
        // 접두사 길이 위치가 문자 경계가 아니어도 안전하게 불일치
        assert!(matches!(parse("한글 식별자"), Err(CpeError::Nonstandard)));
    }

    #[test]
    fn prefix_matches_is_bounded() {
        assert!(!prefix_matches("cpe", URI_PREFIX, false));
        assert!(!prefix_matches("", URI_PREFIX, false));
        assert!(prefix_matches("cpe:/a", URI_PREFIX, false));
        assert!(prefix_matches("CPE:/a", URI_PREFIX, true));
        assert!(!prefix_matches("CPE:/a", URI_PREFIX, false));
    }
}
