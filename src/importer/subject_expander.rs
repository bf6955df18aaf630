// ==========================================
// 数据权限管理系统 - 主体扩展器
// ==========================================
// 职责: user/role 字段的 `+` 多值按位配对展开
// 规则: 一一对应，不做笛卡尔积；多出的部分单独成对
// ==========================================

/// 一条授权记录的主体对（user / role 至多一个为空）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectPair {
    pub user_name: String,
    pub role_name: String,
}

/// 按 `+` 切分主体列表：逐项 trim，丢弃空项，保持顺序
pub fn split_subject_list(field: &str) -> Vec<String> {
    field
        .split('+')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// 位置配对展开
///
/// - 仅一侧非空: 该侧逐项成对，另一侧为空
/// - 两侧非空: 按下标一一对应到 `max(|U|,|R|)`，短侧超出部分留空
///   （`U=[a,b], R=[x,y]` 产出 `{a,x},{b,y}` 两条，而不是四条）
/// - 两侧全空的对被丢弃（防御性，不应出现在主体校验通过之后）
pub fn expand(user_field: &str, role_field: &str) -> Vec<SubjectPair> {
    let users = split_subject_list(user_field);
    let roles = split_subject_list(role_field);

    let count = users.len().max(roles.len());
    let mut pairs = Vec::with_capacity(count);

    for i in 0..count {
        let user_name = users.get(i).cloned().unwrap_or_default();
        let role_name = roles.get(i).cloned().unwrap_or_default();

        // 防御性过滤：两侧全空的对不产出记录
        if user_name.is_empty() && role_name.is_empty() {
            continue;
        }

        pairs.push(SubjectPair {
            user_name,
            role_name,
        });
    }

    pairs
}
