// 学生统计演示：生成随机名册，对比顺序与并行统计结果。
use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use reducer::analytics;
use reducer::student::Student;

const FIRST_NAMES: [&str; 6] = ["Ana", "Luis", "Maria", "Carlos", "Sofia", "Diego"];
const LAST_NAMES: [&str; 4] = ["Gomez", "Lopez", "Martinez", "Torres"];

fn main() -> Result<()> {
    let students = generate_students(10_000);
    println!("生成学生名册，共 {} 条记录", students.len());

    let avg_seq = analytics::average_age_of_enrolled_imperative(&students);
    let avg_par = analytics::average_age_of_enrolled_parallel(&students, 4)?;
    println!("在读学生平均年龄：顺序 {:.4}，并行 {:.4}", avg_seq, avg_par);

    let name_seq = analytics::most_common_first_name_of_inactive_imperative(&students);
    let name_par = analytics::most_common_first_name_of_inactive_parallel(&students, 4)?;
    let name = name_par.context("名册中没有非在读学生")?;
    println!("非在读学生最常见名字：顺序 {:?}，并行 {}", name_seq, name);

    let failed_seq = analytics::count_failed_students_older_than_20_imperative(&students);
    let failed_par = analytics::count_failed_students_older_than_20_parallel(&students, 4)?;
    println!(
        "大于20岁且挂科人数：顺序 {}，并行 {}",
        failed_seq, failed_par
    );

    Ok(())
}

/// 生成随机学生名册
fn generate_students(len: usize) -> Vec<Student> {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| {
            Student::new(
                FIRST_NAMES.choose(&mut rng).unwrap(),
                LAST_NAMES.choose(&mut rng).unwrap(),
                rng.gen_range(16.0..30.0),
                rng.gen_range(0..100),
                rng.gen_bool(0.6),
            )
        })
        .collect()
}
