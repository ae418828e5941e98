use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 封装符合json-api的单个返回对象
///
/// 具体参考：<https://jsonapi.org>
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct Reply<T> {
    pub data: T,
}

/// 封装符合json-api的列表对象
///
/// 项目列表不分页，`total` 即 `data` 的长度
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ReplyList<T> {
    pub data: Vec<T>,

    #[schema(example = 146)]
    /// 列表总数
    pub total: u32,
}

impl<T> From<Vec<T>> for ReplyList<T> {
    fn from(data: Vec<T>) -> Self {
        let total = u32::try_from(data.len()).unwrap_or(u32::MAX);
        Self { data, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_list_total() {
        let list: ReplyList<i32> = vec![3, 1, 2].into();
        assert_eq!(list.total, 3);
        assert_eq!(list.data, vec![3, 1, 2]);

        let empty: ReplyList<i32> = Vec::new().into();
        assert_eq!(empty.total, 0);
    }
}
