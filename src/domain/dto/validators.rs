//! # 공용 커스텀 검증 함수
//!
//! `validator`의 기본 규칙(length, email, url, nested)으로 표현할 수 없는 제약을
//! `#[validate(custom(function = "..."))]`로 연결하기 위한 함수들입니다.
//! 생성 DTO와 수정(patch) DTO가 같은 규칙을 공유합니다.
//!
//! | 함수 | 코드 | 규칙 |
//! |------|------|------|
//! | [`validate_password_strength`] | `password_strength` | 8자 이상, 영문/숫자/특수문자(`@$!%*#?&`) 각 1개 이상, 허용 문자만 사용 |
//! | [`validate_slug`] | `slug` | `^[a-z0-9]+(?:-[a-z0-9]+)*$` |
//! | [`validate_json_string`] | `json` | JSON 객체/배열로 파싱 가능 |
//! | [`validate_image_url`] | `url` | http/https/ftp URL, 스킴 생략 가능, 최상위 도메인 필수 |
//! | [`validate_iso8601`] | `iso8601` | ISO-8601 날짜 또는 일시 |
//! | [`validate_tags`] | `tag_length` | 각 태그 3자 이상 |
//! | [`validate_not_empty_value`] | `not_empty` | `null`과 빈 문자열 거부 |

use std::borrow::Cow;
use std::net::{Ipv4Addr, Ipv6Addr};

use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, TimeZone, Utc, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use validator::ValidationError;

/// 비밀번호에 허용되는 특수문자
pub const PASSWORD_SPECIAL_CHARS: &str = "@$!%*#?&";

/// 비밀번호 최소 길이
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// 태그 최소 길이
pub const TAG_MIN_LENGTH: usize = 3;

/// 대표 이미지 URL에 허용되는 스킴
pub const URL_PROTOCOLS: [&str; 3] = ["http", "https", "ftp"];

const URL_MAX_LENGTH: usize = 2083;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid regex {}: {}", pattern, e))
}

static SLUG_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"^[a-z0-9]+(?:-[a-z0-9]+)*$"));

static HOST_LABEL_REGEX: Lazy<Regex> =
    Lazy::new(|| compile(r"^[\p{L}\p{N}](?:[\p{L}\p{N}-]{0,61}[\p{L}\p{N}])?$"));

static TLD_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"(?i)^(?:\p{L}{2,63}|xn--[a-z0-9-]{2,59})$"));

/// 확장형(`2024-03-16`), 기본형(`20240316`), 축약형(`2024`, `2024-03`),
/// 주 단위(`2024-W11-6`), 서수(`2024-076`) 날짜
static ISO_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"^(?P<year>[+-]?\d{4})",
        r"(?:-(?P<month>\d{2})(?:-(?P<day>\d{2}))?",
        r"|(?P<basic_month>\d{2})(?P<basic_day>\d{2})",
        r"|-?W(?P<week>\d{2})(?:-?(?P<weekday>[1-7]))?",
        r"|-?(?P<ordinal>\d{3}))?$",
    ))
});

/// `HH[:mm[:ss]][.fff][Z|±HH[:mm]]` (콜론 생략 가능)
static ISO_TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"^(?P<hour>\d{2})(?::?(?P<minute>\d{2})(?::?(?P<second>\d{2}))?)?",
        r"(?:[.,](?P<fraction>\d+))?",
        r"(?P<offset>[zZ]|[+-]\d{2}(?::?\d{2})?)?$",
    ))
});

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// 비밀번호 복잡도 검증
///
/// 영문자, 숫자, 특수문자를 각각 하나 이상 포함해야 하며
/// 그 외의 문자(공백, 한글 등)는 허용하지 않습니다.
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let is_allowed = |c: char| c.is_ascii_alphanumeric() || PASSWORD_SPECIAL_CHARS.contains(c);

    let long_enough = password.chars().count() >= PASSWORD_MIN_LENGTH;
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));
    let only_allowed = password.chars().all(is_allowed);

    if !(long_enough && has_letter && has_digit && has_special && only_allowed) {
        return Err(error(
            "password_strength",
            "비밀번호는 8자 이상이며 영문자, 숫자, 특수문자(@$!%*#?&)를 각각 하나 이상 포함해야 합니다",
        ));
    }

    Ok(())
}

/// URL 슬러그 형식 검증 (소문자/숫자 토큰을 단일 `-`로 연결)
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if !SLUG_REGEX.is_match(slug) {
        return Err(error(
            "slug",
            "슬러그는 소문자와 숫자, 구분자 \"-\"만 사용할 수 있습니다. 예: \"my-url\"",
        ));
    }
    Ok(())
}

/// 문자열이 JSON 객체 또는 배열로 파싱되는지 검증합니다. 파싱 결과는 버립니다.
pub fn validate_json_string(raw: &str) -> Result<(), ValidationError> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(_)) | Ok(Value::Array(_)) => Ok(()),
        _ => Err(error(
            "json",
            "schema는 직렬화된 JSON 객체여야 합니다",
        )),
    }
}

/// 대표 이미지 URL 검증
///
/// - 스킴은 `http`, `https`, `ftp`만 허용하며 생략할 수 있습니다 (`example.com/a.jpg`)
/// - 호스트는 최상위 도메인을 가진 도메인 이름이거나 IP 주소여야 합니다
/// - 사용자 정보(`user@host`)와 프로토콜 상대 URL(`//host`)은 허용하지 않습니다
pub fn validate_image_url(raw: &str) -> Result<(), ValidationError> {
    if !is_image_url(raw) {
        return Err(error(
            "url",
            "대표 이미지 URL은 http, https, ftp 주소여야 합니다",
        ));
    }
    Ok(())
}

fn is_image_url(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > URL_MAX_LENGTH || raw.chars().any(char::is_whitespace) {
        return false;
    }

    let rest = match raw.split_once("://") {
        Some((scheme, rest)) => {
            if !URL_PROTOCOLS.iter().any(|p| p.eq_ignore_ascii_case(scheme)) {
                return false;
            }
            rest
        }
        None if raw.starts_with("//") => return false,
        None => raw,
    };

    let authority = rest
        .split(|c: char| matches!(c, '/' | '?' | '#'))
        .next()
        .unwrap_or_default();

    !authority.contains('@') && is_valid_authority(authority)
}

fn is_valid_authority(authority: &str) -> bool {
    if let Some(bracketed) = authority.strip_prefix('[') {
        let Some((ip, after)) = bracketed.split_once(']') else {
            return false;
        };
        let port_ok = after.is_empty() || after.strip_prefix(':').is_some_and(is_valid_port);
        return port_ok && ip.parse::<Ipv6Addr>().is_ok();
    }

    let (host, port) = match authority.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (authority, None),
    };

    port.is_none_or(is_valid_port) && (host.parse::<Ipv4Addr>().is_ok() || is_fqdn(host))
}

fn is_valid_port(port: &str) -> bool {
    port.bytes().all(|b| b.is_ascii_digit()) && port.parse::<u16>().is_ok_and(|n| n > 0)
}

fn is_fqdn(host: &str) -> bool {
    let host = host.strip_suffix('.').unwrap_or(host);
    let labels: Vec<&str> = host.split('.').collect();

    match labels.split_last() {
        Some((tld, rest)) if !rest.is_empty() => {
            TLD_REGEX.is_match(tld) && labels.iter().all(|label| HOST_LABEL_REGEX.is_match(label))
        }
        _ => false,
    }
}

/// ISO-8601 타임스탬프를 UTC로 파싱합니다.
///
/// 허용 형식:
/// - 날짜: `2024-03-16`, `20240316`, `2024-03`, `2024`, `2024-W11-6`, `2024W116`, `2024-076`
/// - 날짜와 시각 구분자: `T` 또는 공백
/// - 시각: `07`, `07:46`, `07:46:32`, `074632`, 소수부(`.123`, `,5`), `24:00`
/// - 오프셋: `Z`, `+09:00`, `+0900`, `+09` (없으면 UTC로 간주)
///
/// 연도만 있는 날짜에는 시각을 붙일 수 없고, 달력에 없는 날짜(`2024-02-30`)는 거부합니다.
pub fn parse_iso8601(raw: &str) -> Option<DateTime<Utc>> {
    let (date_part, time_part) = match raw
        .char_indices()
        .find(|(_, c)| *c == 'T' || c.is_whitespace())
    {
        Some((index, c)) => (&raw[..index], Some(&raw[index + c.len_utf8()..])),
        None => (raw, None),
    };

    let date_caps = ISO_DATE_REGEX.captures(date_part)?;
    let date = iso_date(&date_caps)?;

    let Some(time_part) = time_part else {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    };

    let year_only = ["month", "basic_month", "week", "ordinal"]
        .iter()
        .all(|group| date_caps.name(group).is_none());
    if year_only {
        return None;
    }

    iso_datetime(date, time_part)
}

fn iso_date(caps: &regex::Captures<'_>) -> Option<NaiveDate> {
    let year: i32 = caps["year"].parse().ok()?;
    let number = |name: &str| caps.name(name).and_then(|m| m.as_str().parse::<u32>().ok());

    if let Some(month) = number("month").or_else(|| number("basic_month")) {
        let day = number("day").or_else(|| number("basic_day")).unwrap_or(1);
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Some(week) = number("week") {
        let weekday = number("weekday").unwrap_or(1);
        let weekday = *WEEKDAYS.get(usize::try_from(weekday).ok()?.checked_sub(1)?)?;
        return NaiveDate::from_isoywd_opt(year, week, weekday);
    }

    if let Some(ordinal) = number("ordinal") {
        return NaiveDate::from_yo_opt(year, ordinal);
    }

    NaiveDate::from_ymd_opt(year, 1, 1)
}

fn iso_datetime(date: NaiveDate, raw: &str) -> Option<DateTime<Utc>> {
    let caps = ISO_TIME_REGEX.captures(raw)?;
    let component = |name: &str| {
        caps.name(name)
            .map_or(Some(0), |m| m.as_str().parse::<u32>().ok())
    };

    let (hour, minute, second) = (component("hour")?, component("minute")?, component("second")?);
    let offset = match caps.name("offset") {
        Some(m) => parse_offset(m.as_str())?,
        None => FixedOffset::east_opt(0)?,
    };

    // 소수부는 마지막으로 주어진 단위의 분수
    let fraction_unit_secs = if caps.name("second").is_some() {
        1.0
    } else if caps.name("minute").is_some() {
        60.0
    } else {
        3600.0
    };
    let fraction_nanos = match caps.name("fraction") {
        Some(m) => {
            let fraction: f64 = format!("0.{}", m.as_str()).parse().ok()?;
            (fraction * fraction_unit_secs * 1e9).round() as i64
        }
        None => 0,
    };

    let local = if hour == 24 {
        // 24:00은 다음 날 자정
        if minute != 0 || second != 0 || fraction_nanos != 0 {
            return None;
        }
        date.succ_opt()?.and_hms_opt(0, 0, 0)?
    } else {
        date.and_hms_opt(hour, minute, second)?
            .checked_add_signed(TimeDelta::nanoseconds(fraction_nanos))?
    };

    offset
        .from_local_datetime(&local)
        .single()
        .map(|parsed| parsed.with_timezone(&Utc))
}

/// `Z`, `±HH`, `±HHmm`, `±HH:mm`
fn parse_offset(raw: &str) -> Option<FixedOffset> {
    if raw.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0);
    }

    let sign = if raw.starts_with('-') { -1 } else { 1 };
    let digits: String = raw[1..].chars().filter(|c| *c != ':').collect();
    let hours: i32 = digits.get(..2)?.parse().ok()?;
    let minutes: i32 = match digits.get(2..) {
        Some("") | None => 0,
        Some(m) => m.parse().ok()?,
    };

    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

pub fn validate_iso8601(raw: &str) -> Result<(), ValidationError> {
    match parse_iso8601(raw) {
        Some(_) => Ok(()),
        None => Err(error(
            "iso8601",
            "publishOn은 ISO-8601 형식의 타임스탬프여야 합니다",
        )),
    }
}

/// 태그 목록의 각 항목 길이를 검증합니다.
pub fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    let offending: Vec<usize> = tags
        .iter()
        .enumerate()
        .filter(|(_, tag)| tag.chars().count() < TAG_MIN_LENGTH)
        .map(|(index, _)| index)
        .collect();

    if offending.is_empty() {
        return Ok(());
    }

    let mut err = error("tag_length", "각 태그는 3자 이상이어야 합니다");
    err.add_param(Cow::Borrowed("indexes"), &offending);
    Err(err)
}

/// 값이 `null`이나 빈 문자열이 아닌지 검증합니다. 그 외 타입은 모두 허용합니다.
pub fn validate_not_empty_value(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::Null => Err(error("not_empty", "메타 옵션 값은 비어 있을 수 없습니다")),
        Value::String(s) if s.is_empty() => {
            Err(error("not_empty", "메타 옵션 값은 비어 있을 수 없습니다"))
        }
        _ => Ok(()),
    }
}
