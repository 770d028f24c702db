//! 英文翻译 (en-US)

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
        loading: "Loading...",
        no_data: "No data",
        cancel: "Cancel",
        confirm: "Confirm",
        close: "Close",
        yes: "yes",
        no: "no",
        error: "Error",
        none: "-",
    },

    // ========================================================================
    // 导航树
    // ========================================================================
    tree: TreeTexts {
        title: "Servers",
        root: "Forge",
        no_ip: "no ip",
        loading: "Loading servers...",
        server_info: "ℹ Server Info",
        sites: "Sites",
        site_info: "ℹ Site Info",
        deployments: "Deployments",
        deployment_script: "Deployment Script",
        logs: "Logs",
        environment: "Environment File",
        workers: "Workers",
        backups: "Backups",
        domains: "Domains",
        databases: "Databases",
        database_users: "Database Users",
        ssl_certificates: "SSL Certificates",
        commands: "Commands",
        git_repository: "Git Repository",
        ssh_keys: "SSH Keys",
        daemons: "Daemons",
        firewall_rules: "Firewall Rules",
        scheduled_jobs: "Scheduled Jobs",
    },

    // ========================================================================
    // 详情面板
    // ========================================================================
    panels: PanelTexts {
        placeholder: "Select a resource in the tree and press Enter.",
        fallback: "No panel for",
        failed: "Failed to load",
        empty: "Nothing here yet.",
        masked: "••••••••",
        server_info: "Server",
        site_info: "Site",
        deployments: "Deployments",
        deployment_script: "Deployment Script",
        logs: "Site Log",
        environment: "Environment",
        workers: "Queue Workers",
        backups: "Backup Configurations",
        domains: "Domain Aliases",
        databases: "Databases",
        database_users: "Database Users",
        certificates: "SSL Certificates",
        commands: "Commands",
        git: "Git Repository",
        ssh_keys: "SSH Keys",
        daemons: "Daemons",
        firewall_rules: "Firewall Rules",
        scheduled_jobs: "Scheduled Jobs",
    },

    columns: ColumnTexts {
        id: "ID",
        name: "Name",
        status: "Status",
        connection: "Connection",
        queue: "Queue",
        processes: "Procs",
        timeout: "Timeout",
        domain: "Domain",
        kind: "Type",
        active: "Active",
        commit: "Commit",
        author: "Author",
        message: "Message",
        started: "Started",
        command: "Command",
        user: "User",
        directory: "Directory",
        port: "Port",
        ip: "IP",
        frequency: "Frequency",
        key: "Key",
        value: "Value",
        schedule: "Schedule",
        provider: "Provider",
        last_backup: "Last Backup",
        databases: "Databases",
        created: "Created",
        synced: "Synced",
        alias: "Alias",
    },

    fields: FieldTexts {
        ip_address: "IP Address",
        private_ip: "Private IP",
        region: "Region",
        provider: "Provider",
        server_type: "Type",
        php_version: "PHP",
        database: "Database",
        ubuntu: "Ubuntu",
        ssh_port: "SSH Port",
        ready: "Ready",
        status: "Status",
        repository: "Repository",
        repository_provider: "Provider",
        branch: "Branch",
        repository_status: "Repository Status",
        quick_deploy: "Quick Deploy",
        project_type: "Project Type",
        directory: "Public Directory",
        web_directory: "Web Directory",
        project_directory: "Project Directory",
        aliases: "Aliases",
        secured: "HTTPS",
        deployment_url: "Deploy URL",
    },

    actions: ActionTexts {
        ssh: "SSH",
        sftp: "SFTP",
        reboot: "Reboot",
        server_log: "Server log",
        deploy: "Deploy",
        quick_deploy: "Quick deploy",
        output: "Output",
        latest_log: "Latest log",
        reset_status: "Reset status",
        edit: "Edit",
        clear: "Clear",
        reveal: "Reveal",
        create: "New",
        restart: "Restart",
        delete: "Delete",
        run_backup: "Run backup",
        sync: "Sync",
        activate: "Activate",
        install: "Install",
        branch: "Branch",
        remove: "Remove",
    },

    mutations: MutationTexts {
        reboot_server: "Reboot server",
        deploy: "Deploy site",
        enable_quick_deploy: "Enable quick deploy",
        disable_quick_deploy: "Disable quick deploy",
        reset_deployment: "Reset deployment status",
        update_script: "Update deployment script",
        update_environment: "Update environment file",
        clear_log: "Clear site log",
        create_worker: "Create worker",
        restart_worker: "Restart worker",
        delete_worker: "Delete worker",
        run_backup: "Run backup",
        delete_backup: "Delete backup configuration",
        update_aliases: "Update domain aliases",
        create_database: "Create database",
        sync_databases: "Sync databases",
        delete_database: "Delete database",
        create_database_user: "Create database user",
        delete_database_user: "Delete database user",
        obtain_certificate: "Request Let's Encrypt certificate",
        activate_certificate: "Activate certificate",
        delete_certificate: "Delete certificate",
        execute_command: "Run command",
        install_repository: "Install repository",
        update_branch: "Change branch",
        remove_repository: "Remove repository",
        create_ssh_key: "Add SSH key",
        delete_ssh_key: "Delete SSH key",
        create_daemon: "Create daemon",
        restart_daemon: "Restart daemon",
        delete_daemon: "Delete daemon",
        create_firewall_rule: "Create firewall rule",
        delete_firewall_rule: "Delete firewall rule",
        create_job: "Create scheduled job",
        delete_job: "Delete scheduled job",
    },

    // ========================================================================
    // 表单与弹窗
    // ========================================================================
    form: FormTexts {
        required: "is required",
        numeric: "must be a whole number",
        submit_hint: "Tab next field · Enter submit · Esc cancel",
        new_worker: "New Worker",
        add_alias: "Add Domain Alias",
        new_database: "New Database",
        new_database_user: "New Database User",
        letsencrypt: "Let's Encrypt Certificate",
        run_command: "Run Command",
        install_repository: "Install Repository",
        change_branch: "Change Branch",
        new_ssh_key: "Add SSH Key",
        new_daemon: "New Daemon",
        new_firewall_rule: "New Firewall Rule",
        new_job: "New Scheduled Job",
        api_key: "Forge API Key",
        connection: "Connection",
        queue: "Queue",
        processes: "Processes",
        alias: "Domain",
        name: "Name",
        user: "User",
        password: "Password",
        domains: "Domains",
        domains_hint: "comma separated",
        command: "Command",
        provider: "Provider",
        repository: "Repository",
        branch: "Branch",
        public_key: "Public key",
        directory: "Directory",
        port: "Port",
        ip_address: "IP address",
        optional: "optional",
        frequency: "Frequency",
        frequency_hint: "minutely, hourly, nightly, weekly, monthly, reboot",
        key: "API key",
        key_hint: "create one at forge.laravel.com/user-profile/api",
        one_of: "must be one of",
        config: "Configuration",
        ssh_user: "SSH user",
        editor: "Editor",
        vim_keys: "Vim keys",
        theme: "Theme",
        keep_key_hint: "leave empty to keep the current key",
        yes_no_hint: "yes / no",
        theme_hint: "dark / light",
    },

    modal: ModalTexts {
        confirm_title: "Confirm",
        confirm_question: "Are you sure?",
        error_title: "Error",
        auth_title: "Authentication failed",
        help_title: "Keyboard Shortcuts",
        picker_title: "Select a server",
        picker_empty: "No servers on this account.",
        output_title: "Output",
        deployment_output: "Deployment Output",
        deployment_log: "Latest Deployment Log",
        server_log: "Server Log",
        close_hint: "↑↓ scroll · Esc close",
        palette_title: "Commands",
        palette_empty: "No matching commands",
        palette_hint: "type to filter · ↑↓ select · Enter run · Esc close",
        palette_switch_server: "Switch server",
        palette_edit_config: "Edit configuration",
        palette_reload: "Reload servers",
        palette_toggle_default: "Set / clear project default",
        palette_ssh: "SSH to",
    },

    // ========================================================================
    // 通知
    // ========================================================================
    notify: NotifyTexts {
        done: "done",
        failed: "failed",
        load_servers_failed: "Could not load servers",
        load_sites_failed: "Could not load sites",
        load_panel_failed: "Could not load",
        no_ip: "Server has no public IP address",
        no_selection: "Nothing selected",
        no_changes: "No changes",
        command_failed: "Command failed",
        editor_failed: "Editor failed",
        no_api_key: "No API key configured",
        key_saved: "API key saved to the system keyring",
        key_saved_config: "API key saved to the config file",
        key_save_failed: "Could not save the API key",
        server_not_found: "Server not found",
        alias_exists: "Alias already exists",
        single_mode_only: "The server picker is only available in single-server mode",
        default_cleared: "Cleared default",
        default_set: "set as default",
        default_server_set: "set as default server",
        default_save_failed: "Could not save default",
        config_saved: "Configuration saved",
        config_save_failed: "Could not save configuration",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        navigate: "Navigate",
        select: "Select",
        expand: "Expand",
        switch_panel: "Switch panel",
        refresh: "Refresh",
        reload: "Reload",
        picker: "Servers",
        help: "Help",
        quit: "Quit",
        rows: "Rows",
    },

    help: HelpTexts {
        global: "Global",
        tree: "Tree",
        content: "Content",
        modal: "Dialogs",
        quit: "Quit",
        help: "Show this help",
        switch_focus: "Switch focus",
        reload_tree: "Reload servers",
        refresh_panel: "Refresh panel",
        back: "Back / close",
        move_cursor: "Move cursor",
        first_last: "First / last",
        select_toggle: "Select and toggle",
        expand: "Expand",
        collapse: "Collapse / parent",
        reload_sites: "Reload sites",
        picker: "Server picker",
        rows: "Move selection",
        panel_actions: "Panel actions (see status bar)",
        fields: "Next / previous field",
        submit: "Submit",
        cancel: "Cancel",
        toggle: "Toggle choice",
        toggle_default: "Set / clear project default",
        palette: "Command palette",
        config: "Edit configuration",
    },
};
