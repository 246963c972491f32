//! 请求提取器：路径 id 与请求体

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use serde_json::{Map, Value};

use super::error::CoreError;

/// 宽松地把路径参数解析成整数
///
/// 允许前导空白、正负号和 `0x`/`0X` 十六进制前缀，读取尽可能长的数字前缀，忽略后续字符。
/// 没有数字或超出 `i64` 范围时返回 `None`。
pub fn parse_id(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    // 数字字符均为 ASCII，字符数即字节数
    let digits_len = rest.chars().take_while(|c| c.is_digit(radix)).count();
    if digits_len == 0 {
        return None;
    }

    let value = i64::from_str_radix(&rest[..digits_len], radix).ok()?;
    Some(if negative { -value } else { value })
}

/// 在消息文本中显示 id，无法解析时为 `NaN`
pub fn display_id(id: Option<i64>) -> String {
    id.map_or_else(|| "NaN".to_string(), |id| id.to_string())
}

/// 请求体提取器，字段不做任何类型校验
///
/// - JSON 对象：原样保留各字段的值；空请求体视为 `{}`；数组视为没有字段
/// - JSON 标量：解析失败
/// - 表单：值均为字符串，重复的键合并为数组
/// - 其他或缺少 content-type：没有字段
///
/// 解析失败统一视为内部错误。
#[derive(Debug, Clone, Default)]
pub struct Payload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: From<Map<String, Value>>,
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default();
        let mime = content_type.split(';').next().unwrap_or_default().trim();

        let fields = if mime == "application/json" || mime.ends_with("+json") {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|e| CoreError::InternalServerError(format!("读取请求体失败: {}", e)))?;
            json_fields(&bytes)?
        } else if mime == "application/x-www-form-urlencoded" {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| CoreError::InternalServerError(format!("表单解析失败: {}", e.body_text())))?;
            form_fields(pairs)
        } else {
            Map::new()
        };

        Ok(Payload(T::from(fields)))
    }
}

fn json_fields(bytes: &[u8]) -> Result<Map<String, Value>, CoreError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(Value::Array(_)) => Ok(Map::new()),
        Ok(other) => Err(CoreError::InternalServerError(format!(
            "请求体必须是 JSON 对象或数组: {}",
            other
        ))),
        Err(e) => Err(CoreError::InternalServerError(format!("JSON 解析失败: {}", e))),
    }
}

fn form_fields(pairs: Vec<(String, String)>) -> Map<String, Value> {
    let mut fields = Map::new();
    for (key, value) in pairs {
        match fields.get_mut(&key) {
            Some(Value::Array(values)) => values.push(Value::String(value)),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, Value::String(value)]);
            }
            None => {
                fields.insert(key, Value::String(value));
            }
        }
    }
    fields
}
