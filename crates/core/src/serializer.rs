//! CPE 2.2 방향 직렬화
//!
//! 파싱의 기계적 역방향입니다. 비어 있지 않은 필드만 `:`로 이어 붙이고
//! `cpe:/` ... `/` 외곽으로 감쌉니다.
//!
//! # 알려진 비대칭
//!
//! - 빈 필드는 자리 표시자 없이 생략되므로, 빈 중간 필드 뒤에 값이 있는
//!   레코드는 왕복 시 위치가 당겨집니다 (파서는 뒤쪽 부재 필드를 빈
//!   값으로 기본 처리).
//! - CPE 2.3 고유 필드(swEdition/targetSw/targetHw/other)는 edition으로
//!   재패킹하지 않고 조용히 제외합니다.
//! - part만 있는 레코드는 `cpe:/h/`처럼 직렬화되는데, 이 형태는 part
//!   세그먼트 길이 검사(2바이트) 때문에 다시 파싱되지 않습니다. 왕복
//!   속성은 파싱 -> 직렬화 방향에만 성립합니다.

use crate::error::CpeError;
use crate::parser::URI_PREFIX;
use crate::types::Cpe;

/// 레코드를 CPE 2.2 URI 문자열로 직렬화합니다.
///
/// # Errors
///
/// 모든 필드가 빈 레코드는 `EmptyRecord`, part가 빈 레코드는
/// `InvalidPart`로 실패합니다.
pub fn to_uri_string(cpe: &Cpe) -> Result<String, CpeError> {
    if cpe.is_empty() {
        return Err(CpeError::EmptyRecord);
    }
    if cpe.part.is_empty() {
        return Err(CpeError::InvalidPart {
            value: String::new(),
        });
    }

    let mut uri = String::from(URI_PREFIX);
    uri.push_str(&cpe.part);

    for field in [
        &cpe.vendor,
        &cpe.product,
        &cpe.version,
        &cpe.update,
        &cpe.edition,
        &cpe.language,
    ] {
        if !field.is_empty() {
            uri.push(':');
            uri.push_str(field);
        }
    }

    uri.push('/');
    Ok(uri)
}
