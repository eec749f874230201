//! CPE 2.3 formatted string 파서
//!
//! `cpe:2.3:` 접두사 이후를 왼쪽에서 오른쪽으로 스캔하며 콜론 구분
//! 토큰을 생성합니다. `\`는 다음 문자를 구분자로 해석하지 않도록
//! 보호하며, escape 시퀀스 자체는 디코딩하지 않고 토큰에 그대로
//! 남깁니다 (구분자 보호만 수행).
//!
//! 필드는 정확히 11개 위치를 가지며, 순서가 고정된 슬롯 테이블을 한
//! 번의 루프로 소비해 할당합니다.

use super::{FORMATTED_PREFIX, prefix_matches};
use crate::config::ParserConfig;
use crate::error::CpeError;
use crate::types::{Cpe, Part};

/// formatted string의 필드 토큰 이터레이터
///
/// 바이트 단위로 스캔하며, escape되지 않은 `:`에서 토큰을 끊습니다.
/// `:`와 `\`는 모두 ASCII이므로 토큰 경계는 항상 문자 경계입니다.
struct FieldIter<'a> {
    raw: &'a str,
    pos: usize,
}

impl<'a> FieldIter<'a> {
    /// 접두사 이후 위치에서 시작하는 이터레이터를 생성합니다.
    fn new(raw: &'a str) -> Self {
        Self {
            raw,
            pos: FORMATTED_PREFIX.len(),
        }
    }
}

impl<'a> Iterator for FieldIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.pos >= self.raw.len() {
            return None;
        }

        let bytes = self.raw.as_bytes();
        let mut end = self.pos;
        while end < bytes.len() {
            match bytes[end] {
                b':' => break,
                // 마지막 바이트가 아닌 `\`는 다음 바이트를 함께 소비
                b'\\' if end + 1 < bytes.len() => end += 2,
                _ => end += 1,
            }
        }

        let token = &self.raw[self.pos..end];
        self.pos = end + 1;
        Some(token)
    }
}

/// 위치 테이블 항목 -- 필드명, 선택적 검증기, 할당 대상
struct FieldSlot<'a> {
    name: &'static str,
    validate: Option<fn(&str) -> Result<(), CpeError>>,
    target: &'a mut String,
}

fn validate_part(token: &str) -> Result<(), CpeError> {
    token.parse::<Part>().map(|_| ())
}

/// CPE 2.3 formatted string을 파싱합니다.
///
/// 11개 필드를 위치 순서대로 할당하며, 토큰이 모자라면 비는 첫 필드명을
/// 담아 `TooFewComponents`, `other` 이후 토큰이 남으면
/// `TooManyComponents`로 실패합니다.
pub(crate) fn parse(input: &str, config: &ParserConfig) -> Result<Cpe, CpeError> {
    if !prefix_matches(input, FORMATTED_PREFIX, config.ignore_prefix_case) {
        return Err(CpeError::InvalidFormattedString {
            value: input.to_owned(),
        });
    }

    let mut fields = FieldIter::new(input);
    let mut cpe = Cpe::new();
    {
        let slots: [FieldSlot<'_>; 11] = [
            FieldSlot {
                name: "part",
                validate: Some(validate_part),
                target: &mut cpe.part,
            },
            FieldSlot {
                name: "vendor",
                validate: None,
                target: &mut cpe.vendor,
            },
            FieldSlot {
                name: "product",
                validate: None,
                target: &mut cpe.product,
            },
            FieldSlot {
                name: "version",
                validate: None,
                target: &mut cpe.version,
            },
            FieldSlot {
                name: "update",
                validate: None,
                target: &mut cpe.update,
            },
            FieldSlot {
                name: "edition",
                validate: None,
                target: &mut cpe.edition,
            },
            FieldSlot {
                name: "language",
                validate: None,
                target: &mut cpe.language,
            },
            FieldSlot {
                name: "swEdition",
                validate: None,
                target: &mut cpe.sw_edition,
            },
            FieldSlot {
                name: "targetSw",
                validate: None,
                target: &mut cpe.target_sw,
            },
            FieldSlot {
                name: "targetHw",
                validate: None,
                target: &mut cpe.target_hw,
            },
            FieldSlot {
                name: "other",
                validate: None,
                target: &mut cpe.other,
            },
        ];

        for slot in slots {
            match fields.next() {
                Some(token) => {
                    if let Some(validate) = slot.validate {
                        validate(token)?;
                    }
                    *slot.target = token.to_owned();
                }
                None => {
                    return Err(CpeError::TooFewComponents { field: slot.name });
                }
            }
        }
    }

    if fields.next().is_some() {
        return Err(CpeError::TooManyComponents);
    }

    Ok(cpe)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<&str> {
        FieldIter::new(input).collect()
    }

    #[test]
    fn iterator_splits_on_colons() {
        assert_eq!(
            tokens("cpe:2.3:a:vendor:product"),
            vec!["a", "vendor", "product"]
        );
    }

    #[test]
    fn iterator_protects_escaped_colon() {
        assert_eq!(tokens("cpe:2.3:a:v\\:2:p"), vec!["a", "v\\:2", "p"]);
    }

    #[test]
    fn iterator_keeps_backslash_in_token() {
        // escape는 디코딩하지 않고 구분자 보호만 한다
        assert_eq!(tokens("cpe:2.3:a\\'b"), vec!["a\\'b"]);
    }

    #[test]
    fn iterator_treats_trailing_backslash_as_ordinary_byte() {
        assert_eq!(tokens("cpe:2.3:a\\"), vec!["a\\"]);
    }

    #[test]
    fn iterator_yields_empty_middle_tokens() {
        assert_eq!(tokens("cpe:2.3:a::b"), vec!["a", "", "b"]);
    }

    #[test]
    fn iterator_ignores_trailing_colon() {
        // 마지막 콜론 뒤에 남은 바이트가 없으면 토큰도 없다
        assert_eq!(tokens("cpe:2.3:a:b:"), vec!["a", "b"]);
    }

    #[test]
    fn iterator_handles_multibyte_content() {
        assert_eq!(tokens("cpe:2.3:a:한글:p"), vec!["a", "한글", "p"]);
        assert_eq!(tokens("cpe:2.3:a:\\한:p"), vec!["a", "\\한", "p"]);
    }

    #[test]
    fn parses_eleven_fields() {
        let cpe = parse(
            "cpe:2.3:o:microsoft:windows_server_2012:r2:-:-:*:standard:*:*:*",
            &ParserConfig::default(),
        )
        .unwrap();
        assert_eq!(cpe.part, "o");
        assert_eq!(cpe.vendor, "microsoft");
        assert_eq!(cpe.product, "windows_server_2012");
        assert_eq!(cpe.version, "r2");
        assert_eq!(cpe.update, "-");
        assert_eq!(cpe.edition, "-");
        assert_eq!(cpe.language, "*");
        assert_eq!(cpe.sw_edition, "standard");
        assert_eq!(cpe.target_sw, "*");
        assert_eq!(cpe.target_hw, "*");
        assert_eq!(cpe.other, "*");
    }

    #[test]
    fn rejects_missing_prefix() {
        let err = parse("cpe:/a:v:p", &ParserConfig::default()).unwrap_err();
        assert!(matches!(err, CpeError::InvalidFormattedString { .. }));
    }

    #[test]
    fn rejects_too_few_components_naming_first_missing_field() {
        let err = parse("cpe:2.3:a:vendor:product", &ParserConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CpeError::TooFewComponents { field: "version" }
        ));

        let err = parse("cpe:2.3:a", &ParserConfig::default()).unwrap_err();
        assert!(matches!(err, CpeError::TooFewComponents { field: "vendor" }));
    }

    #[test]
    fn rejects_too_many_components() {
        let err = parse(
            "cpe:2.3:a:v:p:1:u:e:l:se:ts:th:o:extra",
            &ParserConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CpeError::TooManyComponents));
    }

    #[test]
    fn rejects_invalid_part_before_remaining_fields() {
        let err = parse("cpe:2.3:x:v", &ParserConfig::default()).unwrap_err();
        assert!(matches!(err, CpeError::InvalidPart { value } if value == "x"));
    }

    #[test]
    fn wildcard_part_is_rejected() {
        let err = parse(
            "cpe:2.3:*:v:p:1:*:*:*:*:*:*:*",
            &ParserConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CpeError::InvalidPart { .. }));
    }

    #[test]
    fn escaped_colon_survives_in_product_field() {
        let cpe = parse(
            "cpe:2.3:a:v:p\\:q:1.0:*:*:*:*:*:*:*",
            &ParserConfig::default(),
        )
        .unwrap();
        assert_eq!(cpe.product, "p\\:q");
        assert_eq!(cpe.version, "1.0");
    }

    #[test]
    fn escape_sequences_are_kept_verbatim() {
        let cpe = parse(
            "cpe:2.3:a:disney:where\\'s_my_perry?_free:1.5.1:*:*:*:*:android:*:*",
            &ParserConfig::default(),
        )
        .unwrap();
        assert_eq!(cpe.product, "where\\'s_my_perry?_free");
        assert_eq!(cpe.target_sw, "android");
    }

    #[test]
    fn trailing_colon_after_eleven_fields_is_accepted() {
        let cpe = parse(
            "cpe:2.3:a:v:p:1:u:e:l:se:ts:th:o:",
            &ParserConfig::default(),
        )
        .unwrap();
        assert_eq!(cpe.other, "o");
    }

    #[test]
    fn empty_fields_are_assigned_empty() {
        let cpe = parse("cpe:2.3:a::::::::::x", &ParserConfig::default()).unwrap();
        assert_eq!(cpe.part, "a");
        assert!(cpe.vendor.is_empty());
        assert!(cpe.target_hw.is_empty());
        assert_eq!(cpe.other, "x");
    }
}
