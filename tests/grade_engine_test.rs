// ==========================================
// GradeCalculator 引擎集成测试
// ==========================================
// 测试目标: 验证分类汇总、GPA、通过判定与重提交列表
// 覆盖范围: 标准场景 / 空输入 / 单类别 / 边界成绩
// ==========================================

use grade_generator::domain::{Assignment, Category, Status};
use grade_generator::engine::{compute_results, GradeCalculator};
use grade_generator::report::format_summary;

const EPS: f64 = 1e-9;

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建测试用的作业记录
fn create_test_assignment(name: &str, category: &str, grade: f64, weight: f64) -> Assignment {
    let category: Category = category.parse().unwrap();
    Assignment::new(name, category, grade, weight)
}

fn reference_records() -> Vec<Assignment> {
    vec![
        create_test_assignment("Essay", "FA", 80.0, 20.0),
        create_test_assignment("Quiz", "FA", 40.0, 10.0),
        create_test_assignment("Exam", "SA", 90.0, 70.0),
    ]
}

// ==========================================
// 测试用例
// ==========================================

#[test]
fn test_reference_scenario_end_to_end() {
    let results = GradeCalculator::new().compute_results(&reference_records());

    assert!((results.total_fa - 20.0).abs() < EPS);
    assert!((results.fa_weight - 30.0).abs() < EPS);
    assert!((results.total_sa - 63.0).abs() < EPS);
    assert!((results.sa_weight - 70.0).abs() < EPS);
    assert!((results.total_grade - 83.0).abs() < EPS);
    assert!((results.gpa - 4.15).abs() < EPS);
    assert_eq!(results.status, Status::Pass);
    assert_eq!(results.resubmission_display(), "Quiz");

    let summary = format_summary(&results);
    assert_eq!(
        summary,
        "---RESULTS---\n\
         Total Formative: 20.00 / 30.0\n\
         Total Summative: 63.00 / 70.0\n\
         ----------------\n\
         Total Grade: 83.00 / 100\n\
         GPA: 4.1500\n\
         Status: PASS\n\
         Resubmission: Quiz\n"
    );
}

#[test]
fn test_empty_input_fails_without_error() {
    let results = compute_results(&[]);
    assert_eq!(results.total_grade, 0.0);
    assert_eq!(results.gpa, 0.0);
    assert_eq!(results.status, Status::Fail);
    assert_eq!(results.resubmission_display(), "None");
}

#[test]
fn test_all_formative_never_passes() {
    let records = vec![
        create_test_assignment("A", "fa", 100.0, 60.0),
        create_test_assignment("B", "Fa", 75.0, 40.0),
    ];
    let results = compute_results(&records);
    assert!(results.fa_pass);
    assert!(!results.sa_pass);
    assert_eq!(results.sa_weight, 0.0);
    assert_eq!(results.status, Status::Fail);
    assert!(results.resubmission.is_empty());
}

#[test]
fn test_grade_fifty_is_not_resubmitted() {
    let records = vec![
        create_test_assignment("Borderline", "SA", 50.0, 50.0),
        create_test_assignment("Just Below", "FA", 49.9, 50.0),
    ];
    let results = compute_results(&records);
    assert_eq!(results.resubmission, vec!["Just Below".to_string()]);
}

#[test]
fn test_resubmission_ignores_pass_outcome() {
    // 总体 PASS 时依然列出低分作业
    let records = vec![
        create_test_assignment("Quiz 1", "FA", 10.0, 5.0),
        create_test_assignment("Project", "FA", 100.0, 45.0),
        create_test_assignment("Final", "SA", 60.0, 50.0),
    ];
    let results = compute_results(&records);
    assert_eq!(results.status, Status::Pass);
    assert_eq!(results.resubmission_display(), "Quiz 1");
}
