// analytics.rs
// 学生数据统计：顺序实现与基于并行分块折叠的并行实现。
use crate::error::Result;
use crate::reducer::parallel_fold;
use crate::result_merger;
use crate::student::Student;
use std::collections::HashMap;

/// 顺序计算在读学生的平均年龄，没有在读学生时返回0.0
pub fn average_age_of_enrolled_imperative(students: &[Student]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0u64;
    for student in students {
        if student.is_current() {
            sum += student.age();
            count += 1;
        }
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// 并行计算在读学生的平均年龄：各分块先聚合 (和, 个数)，再按分块升序合并
pub fn average_age_of_enrolled_parallel(students: &[Student], task_count: usize) -> Result<f64> {
    let partials = parallel_fold(students, task_count, |chunk| {
        let mut sum = 0.0;
        let mut count = 0u64;
        for student in chunk {
            if student.is_current() {
                sum += student.age();
                count += 1;
            }
        }
        (sum, count)
    })?;
    let (sum, count) = result_merger::merge_average_partials(&partials);
    Ok(if count == 0 { 0.0 } else { sum / count as f64 })
}

/// 顺序统计非在读学生中最常见的名字，没有非在读学生时返回None
pub fn most_common_first_name_of_inactive_imperative(students: &[Student]) -> Option<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for student in students {
        if !student.is_current() {
            *counts.entry(student.first_name().to_string()).or_insert(0) += 1;
        }
    }
    result_merger::most_common_name(&counts)
}

/// 并行统计非在读学生中最常见的名字
pub fn most_common_first_name_of_inactive_parallel(
    students: &[Student],
    task_count: usize,
) -> Result<Option<String>> {
    let partials = parallel_fold(students, task_count, |chunk| {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for student in chunk {
            if !student.is_current() {
                *counts.entry(student.first_name().to_string()).or_insert(0) += 1;
            }
        }
        counts
    })?;
    let merged = result_merger::merge_name_counts(partials);
    Ok(result_merger::most_common_name(&merged))
}

/// 判断学生是否挂科且超龄：非在读、年龄大于20、成绩低于65
fn is_failed_older_than_20(student: &Student) -> bool {
    !student.is_current() && student.age() > 20.0 && student.grade() < 65
}

/// 顺序统计年龄大于20岁且挂科的学生人数
pub fn count_failed_students_older_than_20_imperative(students: &[Student]) -> usize {
    let mut count = 0;
    for student in students {
        if is_failed_older_than_20(student) {
            count += 1;
        }
    }
    count
}

/// 并行统计年龄大于20岁且挂科的学生人数
pub fn count_failed_students_older_than_20_parallel(
    students: &[Student],
    task_count: usize,
) -> Result<usize> {
    let partials = parallel_fold(students, task_count, |chunk| {
        chunk.iter().filter(|s| is_failed_older_than_20(s)).count()
    })?;
    Ok(partials.iter().sum())
}
