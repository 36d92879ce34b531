//! Static chrome strings for the dashboard, one table per locale.
//! Locale switching is shell behavior; this is not an i18n layer.

use corexia_runtime::Locale;

pub(crate) struct Messages {
    pub title: &'static str,
    pub tabs: [&'static str; 6],
    pub hints: &'static str,
    pub search_prompt: &'static str,
    pub loading: &'static str,
    pub sample_data: &'static str,
    pub not_signed_in: &'static str,
    pub signed_in_as: &'static str,
    pub page_label: &'static str,
    pub sorted_by: &'static str,
    pub no_rows: &'static str,
    pub settings_heading: &'static str,
    pub overview_heading: &'static str,
    pub inference_label: &'static str,
}

static EN: Messages = Messages {
    title: "Corexia Console",
    tabs: [
        "Overview",
        "Datasets",
        "Finetunes",
        "Models",
        "Evaluations",
        "Settings",
    ],
    hints: "[/] search  [s] sort  [o] order  [←/→] page  [+/-] page size  [[/]] tab  [b] sidebar  [l] locale  [r] reload  [q] quit",
    search_prompt: "Search",
    loading: "Loading...",
    sample_data: "sample data",
    not_signed_in: "not signed in",
    signed_in_as: "signed in as",
    page_label: "Page",
    sorted_by: "sorted by",
    no_rows: "No records match the current filter.",
    settings_heading: "Settings",
    overview_heading: "Platform overview",
    inference_label: "Inference (7d)",
};

static ZH: Messages = Messages {
    title: "Corexia 控制台",
    tabs: ["概览", "数据集", "微调任务", "模型", "评测", "设置"],
    hints: "[/] 搜索  [s] 排序  [o] 方向  [←/→] 翻页  [+/-] 每页条数  [[/]] 切换页签  [b] 侧栏  [l] 语言  [r] 刷新  [q] 退出",
    search_prompt: "搜索",
    loading: "加载中...",
    sample_data: "示例数据",
    not_signed_in: "未登录",
    signed_in_as: "当前用户",
    page_label: "页",
    sorted_by: "排序",
    no_rows: "没有符合条件的记录。",
    settings_heading: "设置",
    overview_heading: "平台概览",
    inference_label: "推理 (7日)",
};

pub(crate) fn messages(locale: Locale) -> &'static Messages {
    match locale {
        Locale::En => &EN,
        Locale::Zh => &ZH,
    }
}
