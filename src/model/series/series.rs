use crate::common::*;

use crate::model::series::price_record::*;

#[doc = r#"
    차트에 그려질 (기간, 가격) 레코드의 순서 있는 묶음.

    생성 이후에는 읽기 전용이다. 가변 접근자를 제공하지 않으며,
    컴포넌트가 마운트될 때마다 새로 만들어지고 언마운트 시 함께 버려진다.
"#]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Getters)]
#[getset(get = "pub")]
pub struct Series {
    records: Vec<PriceRecord>,
}

impl Series {
    pub fn from_records(records: Vec<PriceRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&PriceRecord> {
        self.records.last()
    }

    pub fn periods(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.period.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|record| record.value)
    }
}
