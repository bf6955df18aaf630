// ==========================================
// 数据权限管理系统 - 导入干跑工具
// ==========================================
// 用法: perm-import <table|column|row|quota> [--batch-sync] < 粘贴文本
// 行为: 本地校验粘贴文本；通过则打印将要提交的请求信封，
//       失败则按行号打印全部校验错误（不触网）
// ==========================================

use data_perm_admin::importer::{assemble, report_local_rejection, ImportError};
use data_perm_admin::{logging, ResourceKind};
use std::io::Read;
use std::process::ExitCode;

fn usage() -> ExitCode {
    eprintln!("用法: perm-import <table|column|row|quota> [--batch-sync]");
    eprintln!("从标准输入读取粘贴文本，校验并打印批量请求信封（干跑，不提交）");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(kind_arg) = args.first() else {
        return usage();
    };

    let kind: ResourceKind = match kind_arg.parse() {
        Ok(kind) => kind,
        Err(message) => {
            eprintln!("{}", message);
            return usage();
        }
    };
    let batch_sync = args.iter().any(|arg| arg == "--batch-sync");

    let mut text = String::new();
    if let Err(error) = std::io::stdin().read_to_string(&mut text) {
        eprintln!("读取标准输入失败: {}", error);
        return ExitCode::FAILURE;
    }

    match assemble(&text, kind, batch_sync) {
        Ok(request) => {
            println!(
                "{}: 校验通过，共 {} 条记录，目标端点 {}",
                kind,
                request.items.len(),
                kind.batch_endpoint()
            );
            match serde_json::to_string_pretty(&request) {
                Ok(json) => println!("{}", json),
                Err(error) => {
                    eprintln!("序列化请求失败: {}", error);
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(ImportError::Validation(errors)) => {
            let report = report_local_rejection(&errors);
            eprintln!("{}: 校验失败，整批拒绝", kind);
            for message in &report.messages {
                eprintln!("{}", message);
            }
            ExitCode::FAILURE
        }
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}
