//! 简体中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, ColumnTexts, CommonTexts, FieldTexts, FormTexts, HelpTexts, HintTexts, ModalTexts,
    MutationTexts, NotifyTexts, PanelTexts, Translations, TreeTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "phorge",
        loading: "加载中...",
        no_data: "暂无数据",
        cancel: "取消",
        confirm: "确认",
        close: "关闭",
        yes: "是",
        no: "否",
        error: "错误",
        none: "-",
    },

    // ========================================================================
    // 导航树
    // ========================================================================
    tree: TreeTexts {
        title: "服务器",
        root: "Forge",
        no_ip: "无 IP",
        loading: "正在加载服务器...",
        server_info: "ℹ 服务器信息",
        sites: "站点",
        site_info: "ℹ 站点信息",
        deployments: "部署",
        deployment_script: "部署脚本",
        logs: "日志",
        environment: "环境变量文件",
        workers: "队列进程",
        backups: "备份",
        domains: "域名",
        databases: "数据库",
        database_users: "数据库用户",
        ssl_certificates: "SSL 证书",
        commands: "命令",
        git_repository: "Git 仓库",
        ssh_keys: "SSH 密钥",
        daemons: "守护进程",
        firewall_rules: "防火墙规则",
        scheduled_jobs: "计划任务",
    },

    // ========================================================================
    // 详情面板
    // ========================================================================
    panels: PanelTexts {
        placeholder: "在左侧选择资源并按 Enter 查看详情。",
        fallback: "没有对应的面板：",
        failed: "加载失败",
        empty: "暂无内容。",
        masked: "••••••••",
        server_info: "服务器",
        site_info: "站点",
        deployments: "部署记录",
        deployment_script: "部署脚本",
        logs: "站点日志",
        environment: "环境变量",
        workers: "队列进程",
        backups: "备份配置",
        domains: "域名别名",
        databases: "数据库",
        database_users: "数据库用户",
        certificates: "SSL 证书",
        commands: "命令",
        git: "Git 仓库",
        ssh_keys: "SSH 密钥",
        daemons: "守护进程",
        firewall_rules: "防火墙规则",
        scheduled_jobs: "计划任务",
    },

    columns: ColumnTexts {
        id: "ID",
        name: "名称",
        status: "状态",
        connection: "连接",
        queue: "队列",
        processes: "进程数",
        timeout: "超时",
        domain: "域名",
        kind: "类型",
        active: "启用",
        commit: "提交",
        author: "作者",
        message: "说明",
        started: "开始时间",
        command: "命令",
        user: "用户",
        directory: "目录",
        port: "端口",
        ip: "IP",
        frequency: "频率",
        key: "键",
        value: "值",
        schedule: "计划",
        provider: "存储",
        last_backup: "最近备份",
        databases: "数据库",
        created: "创建时间",
        synced: "已同步",
        alias: "别名",
    },

    fields: FieldTexts {
        ip_address: "IP 地址",
        private_ip: "内网 IP",
        region: "区域",
        provider: "云服务商",
        server_type: "类型",
        php_version: "PHP",
        database: "数据库",
        ubuntu: "Ubuntu",
        ssh_port: "SSH 端口",
        ready: "就绪",
        status: "状态",
        repository: "仓库",
        repository_provider: "仓库平台",
        branch: "分支",
        repository_status: "仓库状态",
        quick_deploy: "快速部署",
        project_type: "项目类型",
        directory: "公开目录",
        web_directory: "Web 目录",
        project_directory: "项目目录",
        aliases: "别名",
        secured: "HTTPS",
        deployment_url: "部署 URL",
    },

    actions: ActionTexts {
        ssh: "SSH",
        sftp: "SFTP",
        reboot: "重启",
        server_log: "服务器日志",
        deploy: "部署",
        quick_deploy: "快速部署",
        output: "输出",
        latest_log: "最近日志",
        reset_status: "重置状态",
        edit: "编辑",
        clear: "清空",
        reveal: "显示",
        create: "新建",
        restart: "重启",
        delete: "删除",
        run_backup: "立即备份",
        sync: "同步",
        activate: "启用",
        install: "安装",
        branch: "分支",
        remove: "移除",
    },

    mutations: MutationTexts {
        reboot_server: "重启服务器",
        deploy: "部署站点",
        enable_quick_deploy: "开启快速部署",
        disable_quick_deploy: "关闭快速部署",
        reset_deployment: "重置部署状态",
        update_script: "更新部署脚本",
        update_environment: "更新环境变量文件",
        clear_log: "清空站点日志",
        create_worker: "创建队列进程",
        restart_worker: "重启队列进程",
        delete_worker: "删除队列进程",
        run_backup: "立即备份",
        delete_backup: "删除备份配置",
        update_aliases: "更新域名别名",
        create_database: "创建数据库",
        sync_databases: "同步数据库",
        delete_database: "删除数据库",
        create_database_user: "创建数据库用户",
        delete_database_user: "删除数据库用户",
        obtain_certificate: "申请 Let's Encrypt 证书",
        activate_certificate: "启用证书",
        delete_certificate: "删除证书",
        execute_command: "执行命令",
        install_repository: "安装仓库",
        update_branch: "切换分支",
        remove_repository: "移除仓库",
        create_ssh_key: "添加 SSH 密钥",
        delete_ssh_key: "删除 SSH 密钥",
        create_daemon: "创建守护进程",
        restart_daemon: "重启守护进程",
        delete_daemon: "删除守护进程",
        create_firewall_rule: "创建防火墙规则",
        delete_firewall_rule: "删除防火墙规则",
        create_job: "创建计划任务",
        delete_job: "删除计划任务",
    },

    // ========================================================================
    // 表单与弹窗
    // ========================================================================
    form: FormTexts {
        required: "不能为空",
        numeric: "必须是整数",
        submit_hint: "Tab 下一项 · Enter 提交 · Esc 取消",
        new_worker: "新建队列进程",
        add_alias: "添加域名别名",
        new_database: "新建数据库",
        new_database_user: "新建数据库用户",
        letsencrypt: "Let's Encrypt 证书",
        run_command: "执行命令",
        install_repository: "安装仓库",
        change_branch: "切换分支",
        new_ssh_key: "添加 SSH 密钥",
        new_daemon: "新建守护进程",
        new_firewall_rule: "新建防火墙规则",
        new_job: "新建计划任务",
        api_key: "Forge API 密钥",
        connection: "连接",
        queue: "队列",
        processes: "进程数",
        alias: "域名",
        name: "名称",
        user: "用户",
        password: "密码",
        domains: "域名",
        domains_hint: "以逗号分隔",
        command: "命令",
        provider: "平台",
        repository: "仓库",
        branch: "分支",
        public_key: "公钥",
        directory: "目录",
        port: "端口",
        ip_address: "IP 地址",
        optional: "可选",
        frequency: "频率",
        frequency_hint: "minutely, hourly, nightly, weekly, monthly, reboot",
        key: "API 密钥",
        key_hint: "可在 forge.laravel.com/user-profile/api 创建",
        one_of: "只能是",
        config: "配置",
        ssh_user: "SSH 用户",
        editor: "编辑器",
        vim_keys: "Vim 按键",
        theme: "主题",
        keep_key_hint: "留空则保留当前密钥",
        yes_no_hint: "yes / no",
        theme_hint: "dark / light",
    },

    modal: ModalTexts {
        confirm_title: "确认",
        confirm_question: "确定要执行吗？",
        error_title: "错误",
        auth_title: "认证失败",
        help_title: "快捷键",
        picker_title: "选择服务器",
        picker_empty: "该账号下没有服务器。",
        output_title: "输出",
        deployment_output: "部署输出",
        deployment_log: "最近部署日志",
        server_log: "服务器日志",
        close_hint: "↑↓ 滚动 · Esc 关闭",
        palette_title: "命令",
        palette_empty: "没有匹配的命令",
        palette_hint: "输入过滤 · ↑↓ 选择 · Enter 执行 · Esc 关闭",
        palette_switch_server: "切换服务器",
        palette_edit_config: "编辑配置",
        palette_reload: "重新加载服务器",
        palette_toggle_default: "设置 / 清除项目默认值",
        palette_ssh: "SSH 连接",
    },

    // ========================================================================
    // 通知
    // ========================================================================
    notify: NotifyTexts {
        done: "完成",
        failed: "失败",
        load_servers_failed: "无法加载服务器列表",
        load_sites_failed: "无法加载站点列表",
        load_panel_failed: "无法加载",
        no_ip: "该服务器没有公网 IP",
        no_selection: "未选中任何项",
        no_changes: "内容未修改",
        command_failed: "命令执行失败",
        editor_failed: "编辑器执行失败",
        no_api_key: "尚未配置 API 密钥",
        key_saved: "API 密钥已保存到系统钥匙串",
        key_saved_config: "API 密钥已保存到配置文件",
        key_save_failed: "无法保存 API 密钥",
        server_not_found: "找不到服务器",
        alias_exists: "别名已存在",
        single_mode_only: "服务器选择器仅在单服务器模式下可用",
        default_cleared: "已清除默认值",
        default_set: "已设为默认",
        default_server_set: "已设为默认服务器",
        default_save_failed: "无法保存默认值",
        config_saved: "配置已保存",
        config_save_failed: "无法保存配置",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        navigate: "移动",
        select: "选择",
        expand: "展开",
        switch_panel: "切换面板",
        refresh: "刷新",
        reload: "重新加载",
        picker: "服务器",
        help: "帮助",
        quit: "退出",
        rows: "选择行",
    },

    help: HelpTexts {
        global: "全局",
        tree: "导航树",
        content: "内容区",
        modal: "弹窗",
        quit: "退出",
        help: "显示帮助",
        switch_focus: "切换焦点",
        reload_tree: "重新加载服务器",
        refresh_panel: "刷新面板",
        back: "返回 / 关闭",
        move_cursor: "移动光标",
        first_last: "首项 / 末项",
        select_toggle: "选中并展开 / 收起",
        expand: "展开",
        collapse: "收起 / 回到上级",
        reload_sites: "重新加载站点",
        picker: "选择服务器",
        rows: "移动选中行",
        panel_actions: "面板操作（见状态栏）",
        fields: "下一项 / 上一项",
        submit: "提交",
        cancel: "取消",
        toggle: "切换选项",
        toggle_default: "设置 / 清除项目默认值",
        palette: "命令面板",
        config: "编辑配置",
    },
};
