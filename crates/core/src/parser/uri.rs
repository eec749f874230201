//! CPE 2.2 URI 파서
//!
//! `cpe:/` 형식 문자열을 콜론으로 분할하고, 각 세그먼트를 구조적
//! 슬래시 정규화([`well_formed`])를 거쳐 위치 순서대로 레코드에
//! 할당합니다. edition 세그먼트는 `~`로 패킹된 다중 필드 인코딩일 수
//! 있으며 [`unpack_edition`]이 처리합니다.

use crate::error::CpeError;
use crate::types::{Cpe, Part};

/// CPE 2.2 URI 문자열을 파싱합니다.
///
/// 세그먼트 구성: `cpe` / part / vendor / product / version / update /
/// edition / language. part 이후 필드는 모두 선택적이며, 없는 위치는
/// 빈 문자열로 남습니다.
pub(crate) fn parse(input: &str) -> Result<Cpe, CpeError> {
    let segments: Vec<&str> = input.split(':').collect();
    if segments.len() <= 1 || segments.len() > 8 {
        return Err(CpeError::InvalidSegmentCount {
            count: segments.len(),
        });
    }

    // part 세그먼트는 선행 슬래시를 포함해 정확히 2바이트 (예: "/a")
    let part_segment = segments[1];
    if part_segment.len() != 2 {
        return Err(CpeError::InvalidPart {
            value: part_segment.to_owned(),
        });
    }

    let mut cpe = Cpe::new();
    cpe.part = well_formed(part_segment).to_owned();
    if cpe.part.is_empty() {
        return Err(CpeError::InvalidPart {
            value: part_segment.to_owned(),
        });
    }

    {
        let slots: [&mut String; 4] = [
            &mut cpe.vendor,
            &mut cpe.product,
            &mut cpe.version,
            &mut cpe.update,
        ];
        for (slot, segment) in slots.into_iter().zip(segments[2..].iter().copied()) {
            *slot = well_formed(segment).to_owned();
        }
    }

    if let Some(segment) = segments.get(6) {
        let edition = well_formed(segment);
        unpack_edition(&mut cpe, edition)?;
    }
    if let Some(segment) = segments.get(7) {
        cpe.language = well_formed(segment).to_owned();
    }

    Ok(cpe)
}

/// URI 세그먼트를 well-formed 필드 값으로 정규화합니다.
///
/// - 빈 세그먼트는 그대로 빈 값
/// - `/`로 시작하면 슬래시를 제거하고 나머지를 part 닫힌 집합으로
///   검증. 실패하면 빈 값을 반환해 호출자가 필드를 버리게 함
/// - `/`로 끝나면 URI 외곽의 구조적 슬래시 하나만 제거
/// - 그 외에는 값 그대로
///
/// 이 함수는 실패하지 않습니다. 잘못된 part는 호출자가 빈 결과로
/// 감지합니다.
pub(crate) fn well_formed(segment: &str) -> &str {
    if segment.is_empty() {
        ""
    } else if let Some(rest) = segment.strip_prefix('/') {
        if Part::is_valid_code(rest) { rest } else { "" }
    } else if let Some(rest) = segment.strip_suffix('/') {
        rest
    } else {
        segment
    }
}

/// CPE 2.2 edition 필드를 언패킹해 레코드에 반영합니다.
///
/// `~`로 시작하는 값은 `~edition~swEdition~targetSw~targetHw~other`
/// 형태의 패킹 인코딩으로 보고 최대 5개 서브 필드로 분할합니다. 존재하는
/// 서브 필드만 할당하며, 5개를 초과하면 `InvalidPackedEdition`으로
/// 실패합니다. `~`로 시작하지 않는 값은 edition에 그대로 할당됩니다.
///
/// edition 세그먼트가 존재하는 경우에만 호출되므로, 빈 값은
/// `EmptyEdition` 에러입니다.
pub(crate) fn unpack_edition(cpe: &mut Cpe, edition: &str) -> Result<(), CpeError> {
    if edition.is_empty() {
        return Err(CpeError::EmptyEdition);
    }

    let Some(packed) = edition.strip_prefix('~') else {
        cpe.edition = edition.to_owned();
        return Ok(());
    };

    let unpacked: Vec<&str> = packed.split('~').collect();
    if unpacked.len() > 5 {
        return Err(CpeError::InvalidPackedEdition {
            count: unpacked.len(),
        });
    }

    let slots: [&mut String; 5] = [
        &mut cpe.edition,
        &mut cpe.sw_edition,
        &mut cpe.target_sw,
        &mut cpe.target_hw,
        &mut cpe.other,
    ];
    for (slot, value) in slots.into_iter().zip(unpacked) {
        *slot = value.to_owned();
    }

    Ok(())
}
