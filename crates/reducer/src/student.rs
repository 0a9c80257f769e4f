// student.rs
// 学生记录：不可变数据结构，只提供只读访问器。
use serde::{Deserialize, Serialize};

/// 学生记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    first_name: String,
    last_name: String,
    age: f64,
    grade: i32,
    is_current: bool,
}

impl Student {
    /// 创建学生记录
    pub fn new(first_name: &str, last_name: &str, age: f64, grade: i32, is_current: bool) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age,
            grade,
            is_current,
        }
    }

    /// 名
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// 姓
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// 年龄
    pub fn age(&self) -> f64 {
        self.age
    }

    /// 成绩
    pub fn grade(&self) -> i32 {
        self.grade
    }

    /// 是否在读
    pub fn is_current(&self) -> bool {
        self.is_current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_return_constructed_values() {
        let student = Student::new("Ana", "Gomez", 21.5, 80, true);
        assert_eq!(student.first_name(), "Ana");
        assert_eq!(student.last_name(), "Gomez");
        assert_eq!(student.age(), 21.5);
        assert_eq!(student.grade(), 80);
        assert!(student.is_current());
    }
}
