//! 파서 설정
//!
//! [`ParserConfig`]는 방언 접두사 매칭의 대소문자 처리와 입력 크기
//! 상한을 제어합니다. 기본값은 참조 동작과 동일한 대소문자 구분
//! 매칭입니다.
//!
//! # 사용 예시
//!
//! ```
//! use cpekit_core::ParserConfig;
//!
//! // 기본값으로 생성
//! let config = ParserConfig::default();
//! config.validate().unwrap();
//!
//! // 빌더로 생성
//! use cpekit_core::ParserConfigBuilder;
//!
//! let config = ParserConfigBuilder::new()
//!     .ignore_prefix_case(true)
//!     .max_input_len(1024)
//!     .build()
//!     .unwrap();
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CpeError;

/// 입력 크기 상한값 상수
const MAX_INPUT_LEN_LIMIT: usize = 1024 * 1024; // 1 MiB

/// 파서 설정
///
/// # 필드
///
/// - **ignore_prefix_case**: `cpe:/`, `cpe:2.3:` 접두사 매칭 시 ASCII
///   대소문자를 무시할지 여부. 두 방언 판별과 2.3 경로 내부의 접두사
///   재확인에 동일하게 적용됩니다.
/// - **max_input_len**: 파싱을 시도할 최대 입력 크기 (바이트). 초과 시
///   방언 판별 전에 `InputTooLarge`로 실패합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// 접두사 매칭 시 ASCII 대소문자 무시 여부
    pub ignore_prefix_case: bool,
    /// 최대 입력 크기 (바이트)
    pub max_input_len: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            ignore_prefix_case: false,
            max_input_len: 4096,
        }
    }
}

impl ParserConfig {
    /// 설정 값의 유효성을 검증합니다.
    ///
    /// # 검증 규칙
    ///
    /// - `max_input_len`: 1-1048576 (1 MiB)
    pub fn validate(&self) -> Result<(), CpeError> {
        if self.max_input_len == 0 || self.max_input_len > MAX_INPUT_LEN_LIMIT {
            return Err(CpeError::Config {
                field: "max_input_len".to_owned(),
                reason: format!("must be 1-{MAX_INPUT_LEN_LIMIT}"),
            });
        }

        Ok(())
    }
}

/// [`ParserConfig`] 빌더
#[derive(Default)]
pub struct ParserConfigBuilder {
    config: ParserConfig,
}

impl ParserConfigBuilder {
    /// 기본값을 가진 새 빌더를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 접두사 대소문자 무시 여부를 설정합니다.
    pub fn ignore_prefix_case(mut self, ignore: bool) -> Self {
        self.config.ignore_prefix_case = ignore;
        self
    }

    /// 최대 입력 크기(바이트)를 설정합니다.
    pub fn max_input_len(mut self, len: usize) -> Self {
        self.config.max_input_len = len;
        self
    }

    /// 설정을 검증하고 빌드합니다.
    ///
    /// # Errors
    ///
    /// 유효성 검증 실패 시 `CpeError::Config` 반환
    pub fn build(self) -> Result<ParserConfig, CpeError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
