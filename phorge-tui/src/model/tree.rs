//! 导航树
//!
//! 使用 arena 存储节点（`NodeId` 即下标），根节点固定为 0 号且不携带数据。
//!
//! 树本身不发起任何网络请求：选中 / 展开 / 收起都以 [`TreeEvent`] 的形式返回，
//! 由 update 层决定是否加载站点或切换详情面板。
//!
//! 每次 `populate*` 都会丢弃旧节点并递增 `generation`，
//! 异步回来的站点列表需要携带发起时的 generation，过期结果直接丢弃。

use phorge_api::{Server, Site};

use crate::i18n::t;

use super::node::{NodeData, NodeKind};

/// 节点 ID（arena 下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// 根节点
    pub const ROOT: NodeId = NodeId(0);
}

/// 树节点
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// 节点数据（根节点为 None）
    pub data: Option<NodeData>,
    /// 父节点
    pub parent: Option<NodeId>,
    /// 子节点（有序）
    pub children: Vec<NodeId>,
    /// 是否展开
    pub expanded: bool,
}

/// 树事件，交给 update 层处理
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeEvent {
    /// 节点被选中（Enter）
    Selected(NodeId),
    /// 节点被展开
    Expanded(NodeId),
    /// 节点被收起
    Collapsed(NodeId),
}

/// 一行可见节点（用于渲染和光标移动）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow {
    pub id: NodeId,
    pub depth: usize,
    pub expandable: bool,
    pub expanded: bool,
}

/// 导航树状态
#[derive(Debug, Clone)]
pub struct NavigationTree {
    nodes: Vec<TreeNode>,
    /// 光标所在节点
    cursor: NodeId,
    /// 每次重建递增
    generation: u64,
    /// 被回收的槽位，`push` 优先复用
    free: Vec<NodeId>,
}

impl NavigationTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Self::root_node()],
            cursor: NodeId::ROOT,
            generation: 0,
            free: Vec::new(),
        }
    }

    fn root_node() -> TreeNode {
        TreeNode {
            data: None,
            parent: None,
            children: Vec::new(),
            expanded: true,
        }
    }

    // ========================================================================
    // 查询
    // ========================================================================

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    /// 已回收的槽位视为不存在
    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes
            .get(id.0)
            .filter(|node| id == NodeId::ROOT || node.parent.is_some())
    }

    pub fn data(&self, id: NodeId) -> Option<&NodeData> {
        self.node(id).and_then(|node| node.data.as_ref())
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map_or(&[], |node| node.children.as_slice())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|node| node.parent)
    }

    /// 节点的显示文本
    pub fn label(&self, id: NodeId) -> &str {
        match self.data(id) {
            Some(data) => &data.label,
            None => t().tree.root,
        }
    }

    /// 从节点自身开始，沿父链一直走到根
    pub fn lineage(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.node(id).map(|_| id), |current| self.parent(*current))
    }

    /// 可展开：有子节点，或是分组节点（站点分组在加载前为空）
    pub fn is_expandable(&self, id: NodeId) -> bool {
        if id == NodeId::ROOT {
            return false;
        }
        !self.children(id).is_empty() || self.data(id).is_some_and(|data| data.kind.is_group())
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|node| node.expanded)
    }

    /// 顶层服务器节点
    pub fn servers(&self) -> &[NodeId] {
        self.children(NodeId::ROOT)
    }

    /// 某服务器下的站点分组节点
    pub fn sites_group_of(&self, server_id: i64) -> Option<NodeId> {
        self.servers()
            .iter()
            .filter(|id| self.data(**id).is_some_and(|data| data.server_id == server_id))
            .flat_map(|id| self.children(*id).iter().copied())
            .find(|id| self.data(*id).is_some_and(|data| data.kind == NodeKind::SitesGroup))
    }

    /// 有效的连接信息（IP, 端口）：节点自身或最近的祖先
    pub fn effective_connection(&self, id: NodeId) -> Option<(String, u16)> {
        self.lineage(id)
            .filter_map(|node| self.data(node))
            .find_map(|data| data.server_ip.clone().map(|ip| (ip, data.ssh_port)))
    }

    /// 有效的站点项目目录：节点自身或最近的祖先
    pub fn effective_site_directory(&self, id: NodeId) -> Option<String> {
        self.lineage(id)
            .filter_map(|node| self.data(node))
            .find_map(|data| data.site_directory.clone())
    }

    /// 节点数据的副本，连接信息和项目目录缺失时沿祖先补齐
    pub fn resolved_data(&self, id: NodeId) -> Option<NodeData> {
        let mut data = self.data(id)?.clone();
        if data.server_ip.is_none() {
            if let Some((ip, port)) = self.effective_connection(id) {
                data.server_ip = Some(ip);
                data.ssh_port = port;
            }
        }
        if data.site_directory.is_none() {
            data.site_directory = self.effective_site_directory(id);
        }
        Some(data)
    }

    /// 展平所有可见节点（根节点可见，收起的子树隐藏）
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        let mut rows = Vec::new();
        let mut stack = vec![(NodeId::ROOT, 0usize)];

        while let Some((id, depth)) = stack.pop() {
            let expanded = self.is_expanded(id);
            rows.push(VisibleRow {
                id,
                depth,
                expandable: self.is_expandable(id),
                expanded,
            });
            if expanded {
                for child in self.children(id).iter().rev() {
                    stack.push((*child, depth + 1));
                }
            }
        }

        rows
    }

    // ========================================================================
    // 建树
    // ========================================================================

    /// 清空所有节点并递增 generation
    pub fn clear(&mut self) {
        self.nodes = vec![Self::root_node()];
        self.free.clear();
        self.cursor = NodeId::ROOT;
        self.generation += 1;
    }

    /// 按输入顺序为每台服务器建立节点，只展开根节点
    pub fn populate(&mut self, servers: &[Server]) {
        self.clear();
        for server in servers {
            self.add_server(server);
        }
    }

    /// 单服务器模式：站点立即填充，服务器和站点分组都展开
    pub fn populate_single_server(&mut self, server: &Server, sites: &[Site], ssh_user: &str) {
        self.clear();
        let server_node = self.add_server(server);
        self.set_expanded(server_node, true);

        if let Some(group) = self.sites_group_of(server.id) {
            self.add_sites_to(group, sites, ssh_user);
            self.set_expanded(group, true);
        }
        self.cursor = server_node;
    }

    /// 在站点分组下追加站点节点，并标记为已加载
    ///
    /// 目标不是站点分组时不做任何修改，返回 false。
    pub fn add_sites_to(&mut self, group: NodeId, sites: &[Site], ssh_user: &str) -> bool {
        let Some(group_data) = self.data(group).cloned() else {
            return false;
        };
        if group_data.kind != NodeKind::SitesGroup {
            log::warn!("add_sites_to called on {} node", group_data.kind);
            return false;
        }

        for site in sites {
            let directory = derive_site_directory(site, ssh_user);
            let site_data = NodeData {
                site_id: Some(site.id),
                label: site.name.clone(),
                server_ip: group_data.server_ip.clone(),
                ssh_port: group_data.ssh_port,
                site_name: Some(site.name.clone()),
                site_directory: Some(directory),
                ..NodeData::new(NodeKind::SiteRoot, group_data.server_id)
            };
            let site_node = self.push(group, site_data.clone());

            for kind in NodeKind::SITE_CHILDREN {
                let child = NodeData {
                    kind,
                    label: kind.label().to_string(),
                    ..site_data.clone()
                };
                self.push(site_node, child);
            }
        }

        if let Some(data) = self.data_mut(group) {
            data.loaded = true;
        }
        true
    }

    /// 丢弃站点分组的子节点并清除 loaded 标记
    pub fn reset_sites(&mut self, group: NodeId) {
        let is_group = self.data(group).is_some_and(|data| data.kind == NodeKind::SitesGroup);
        if !is_group {
            return;
        }

        let cursor_inside = self.lineage(self.cursor).any(|id| id == group) && self.cursor != group;
        let detached = self
            .nodes
            .get_mut(group.0)
            .map(|node| {
                if let Some(data) = node.data.as_mut() {
                    data.loaded = false;
                }
                std::mem::take(&mut node.children)
            })
            .unwrap_or_default();
        self.release(detached);
        if cursor_inside {
            self.cursor = group;
        }
    }

    /// 回收整棵子树的槽位
    fn release(&mut self, roots: Vec<NodeId>) {
        let mut stack = roots;
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get_mut(id.0) else {
                continue;
            };
            stack.append(&mut node.children);
            node.data = None;
            node.parent = None;
            node.expanded = false;
            self.free.push(id);
        }
    }

    fn add_server(&mut self, server: &Server) -> NodeId {
        let texts = t();
        let ip_label = server.ip_address.as_deref().unwrap_or(texts.tree.no_ip);
        let server_data = NodeData {
            label: format!("{} ({ip_label})", server.name),
            server_ip: server.ip_address.clone(),
            ssh_port: server.ssh_port,
            ..NodeData::new(NodeKind::ServerRoot, server.id)
        };
        let server_node = self.push(NodeId::ROOT, server_data.clone());

        for kind in NodeKind::SERVER_CHILDREN {
            let child = NodeData {
                kind,
                label: kind.label().to_string(),
                ..server_data.clone()
            };
            self.push(server_node, child);
        }

        server_node
    }

    fn push(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let node = TreeNode {
            data: Some(data),
            parent: Some(parent),
            children: Vec::new(),
            expanded: false,
        };
        let id = match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = node;
                id
            }
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            }
        };
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.push(id);
        }
        id
    }

    pub fn data_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id.0).and_then(|node| node.data.as_mut())
    }

    fn set_expanded(&mut self, id: NodeId, expanded: bool) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.expanded = expanded;
        }
    }

    // ========================================================================
    // 光标与展开
    // ========================================================================

    /// 把光标移到指定节点（节点必须存在）
    pub fn set_cursor(&mut self, id: NodeId) {
        if self.node(id).is_some() {
            self.cursor = id;
        }
    }

    pub fn cursor_up(&mut self) {
        let rows = self.visible_rows();
        if let Some(index) = rows.iter().position(|row| row.id == self.cursor) {
            if index > 0 {
                self.cursor = rows[index - 1].id;
            }
        }
    }

    pub fn cursor_down(&mut self) {
        let rows = self.visible_rows();
        if let Some(index) = rows.iter().position(|row| row.id == self.cursor) {
            if let Some(next) = rows.get(index + 1) {
                self.cursor = next.id;
            }
        }
    }

    pub fn cursor_first(&mut self) {
        self.cursor = NodeId::ROOT;
    }

    pub fn cursor_last(&mut self) {
        if let Some(last) = self.visible_rows().last() {
            self.cursor = last.id;
        }
    }

    /// Enter：选中光标节点，可展开的节点同时切换展开状态
    pub fn activate(&mut self) -> Vec<TreeEvent> {
        let id = self.cursor;
        let mut events = vec![TreeEvent::Selected(id)];
        if self.is_expandable(id) {
            let event = if self.is_expanded(id) {
                self.collapse(id)
            } else {
                self.expand(id)
            };
            events.extend(event);
        }
        events
    }

    /// 展开节点（已展开或不可展开时返回 None）
    pub fn expand(&mut self, id: NodeId) -> Option<TreeEvent> {
        if !self.is_expandable(id) || self.is_expanded(id) {
            return None;
        }
        self.set_expanded(id, true);
        Some(TreeEvent::Expanded(id))
    }

    /// 收起节点，光标在其子树内时移回该节点
    pub fn collapse(&mut self, id: NodeId) -> Option<TreeEvent> {
        if !self.is_expandable(id) || !self.is_expanded(id) {
            return None;
        }
        self.set_expanded(id, false);
        if self.lineage(self.cursor).any(|node| node == id) {
            self.cursor = id;
        }
        Some(TreeEvent::Collapsed(id))
    }

    /// ←：已展开则收起，否则跳到父节点
    pub fn collapse_or_parent(&mut self) -> Option<TreeEvent> {
        let id = self.cursor;
        if self.is_expandable(id) && self.is_expanded(id) {
            return self.collapse(id);
        }
        if let Some(parent) = self.parent(id) {
            self.cursor = parent;
        }
        None
    }
}

impl Default for NavigationTree {
    fn default() -> Self {
        Self::new()
    }
}

/// 推导站点的项目目录
///
/// `web_directory` 以 `/<directory>` 结尾时去掉该后缀；`directory` 为空时
/// 项目目录就是 `web_directory`；其余情况使用 `/home/<ssh_user>/<站点名>`。
pub fn derive_site_directory(site: &Site, ssh_user: &str) -> String {
    let fallback = || format!("/home/{ssh_user}/{}", site.name);

    let web = site.web_directory.as_deref().unwrap_or("").trim_end_matches('/');
    if web.is_empty() {
        return fallback();
    }

    let relative = site
        .directory
        .as_deref()
        .unwrap_or("")
        .trim_end_matches('/')
        .trim_start_matches('/');
    if relative.is_empty() {
        return web.to_string();
    }

    match web.strip_suffix(relative) {
        Some(root) if root.ends_with('/') && root.len() > 1 => root.trim_end_matches('/').to_string(),
        _ => fallback(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn server(id: i64, name: &str, ip: Option<&str>) -> Server {
        serde_json::from_value(json!({ "id": id, "name": name, "ip_address": ip, "ssh_port": 2222 }))
            .unwrap()
    }

    fn site(id: i64, name: &str, directory: Option<&str>, web_directory: Option<&str>) -> Site {
        serde_json::from_value(json!({
            "id": id,
            "name": name,
            "directory": directory,
            "web_directory": web_directory,
        }))
        .unwrap()
    }

    fn kinds(tree: &NavigationTree, id: NodeId) -> Vec<NodeKind> {
        tree.children(id)
            .iter()
            .map(|child| tree.data(*child).unwrap().kind)
            .collect()
    }

    fn loaded_tree() -> (NavigationTree, NodeId) {
        let mut tree = NavigationTree::new();
        tree.populate(&[server(1, "web-1", Some("10.0.0.1"))]);
        let group = tree.sites_group_of(1).unwrap();
        tree.add_sites_to(
            group,
            &[site(7, "example.com", Some("/public"), Some("/home/forge/example.com/public"))],
            "forge",
        );
        (tree, group)
    }

    // ---- populate ----

    #[test]
    fn populate_keeps_input_order() {
        let mut tree = NavigationTree::new();
        tree.populate(&[server(1, "web-1", Some("10.0.0.1")), server(2, "web-2", Some("10.0.0.2"))]);

        let ids: Vec<i64> = tree
            .servers()
            .iter()
            .map(|id| tree.data(*id).unwrap().server_id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn populate_adds_eight_children_in_fixed_order() {
        let mut tree = NavigationTree::new();
        tree.populate(&[server(1, "a", None), server(2, "b", None), server(3, "c", None)]);

        assert_eq!(tree.servers().len(), 3);
        for server_node in tree.servers() {
            assert_eq!(kinds(&tree, *server_node), NodeKind::SERVER_CHILDREN.to_vec());
        }
    }

    #[test]
    fn populate_expands_only_the_root() {
        let mut tree = NavigationTree::new();
        tree.populate(&[server(1, "web-1", None)]);

        assert!(tree.is_expanded(NodeId::ROOT));
        assert!(!tree.is_expanded(tree.servers()[0]));
        let group = tree.sites_group_of(1).unwrap();
        assert!(!tree.data(group).unwrap().loaded);
        assert!(tree.children(group).is_empty());
    }

    #[test]
    fn populate_twice_is_idempotent() {
        let servers = [server(1, "web-1", Some("10.0.0.1")), server(2, "web-2", None)];
        let mut once = NavigationTree::new();
        once.populate(&servers);
        let mut twice = NavigationTree::new();
        twice.populate(&servers);
        twice.populate(&servers);

        assert_eq!(once.visible_rows(), twice.visible_rows());
        assert_eq!(twice.servers().len(), 2);
        assert_eq!(twice.generation(), once.generation() + 1);
    }

    #[test]
    fn server_label_mentions_missing_ip() {
        let mut tree = NavigationTree::new();
        tree.populate(&[server(1, "web-1", None), server(2, "web-2", Some("1.2.3.4"))]);

        assert_eq!(tree.label(tree.servers()[0]), "web-1 (no ip)");
        assert_eq!(tree.label(tree.servers()[1]), "web-2 (1.2.3.4)");
        assert_eq!(tree.data(tree.servers()[0]).unwrap().server_ip, None);
    }

    // ---- sites ----

    #[test]
    fn add_sites_marks_loaded_and_adds_twelve_children() {
        let mut tree = NavigationTree::new();
        tree.populate(&[server(1, "web-1", Some("10.0.0.1"))]);
        let group = tree.sites_group_of(1).unwrap();
        let sites = [site(7, "a.com", None, None), site(8, "b.com", None, None)];

        assert!(tree.add_sites_to(group, &sites, "forge"));

        assert!(tree.data(group).unwrap().loaded);
        assert_eq!(tree.children(group).len(), 2);
        for site_node in tree.children(group) {
            let data = tree.data(*site_node).unwrap();
            assert_eq!(data.kind, NodeKind::SiteRoot);
            assert_eq!(kinds(&tree, *site_node), NodeKind::SITE_CHILDREN.to_vec());
        }
    }

    #[test]
    fn add_sites_to_non_group_is_rejected() {
        let mut tree = NavigationTree::new();
        tree.populate(&[server(1, "web-1", None)]);
        let server_node = tree.servers()[0];
        let before = tree.children(server_node).len();

        assert!(!tree.add_sites_to(server_node, &[site(7, "a.com", None, None)], "forge"));
        assert_eq!(tree.children(server_node).len(), before);
    }

    #[test]
    fn site_id_present_only_under_site_roots() {
        let (tree, group) = loaded_tree();

        assert_eq!(tree.data(group).unwrap().site_id, None);
        assert_eq!(tree.data(tree.servers()[0]).unwrap().site_id, None);
        let site_node = tree.children(group)[0];
        assert_eq!(tree.data(site_node).unwrap().site_id, Some(7));
        for child in tree.children(site_node) {
            let data = tree.data(*child).unwrap();
            assert_eq!(data.site_id, Some(7));
            assert_eq!(data.site_name.as_deref(), Some("example.com"));
            assert_eq!(data.site_directory.as_deref(), Some("/home/forge/example.com"));
        }
    }

    #[test]
    fn reset_sites_clears_children_and_flag() {
        let (mut tree, group) = loaded_tree();
        let site_node = tree.children(group)[0];
        tree.set_cursor(site_node);

        tree.reset_sites(group);

        assert!(tree.children(group).is_empty());
        assert!(!tree.data(group).unwrap().loaded);
        assert_eq!(tree.cursor(), group);
    }

    #[test]
    fn repeated_site_reloads_reuse_slots() {
        let mut tree = NavigationTree::new();
        tree.populate(&[server(1, "web-1", Some("10.0.0.1"))]);
        let group = tree.sites_group_of(1).unwrap();
        let sites: Vec<Site> = (0..10).map(|i| site(i, &format!("s{i}.com"), None, None)).collect();

        tree.add_sites_to(group, &sites, "forge");
        let size = tree.nodes.len();
        for _ in 0..50 {
            tree.reset_sites(group);
            tree.add_sites_to(group, &sites, "forge");
        }

        assert_eq!(tree.nodes.len(), size);
        assert!(tree.free.is_empty());
        assert_eq!(tree.children(group).len(), 10);
        let site_node = tree.children(group)[3];
        assert_eq!(tree.data(site_node).unwrap().site_id, Some(3));
        assert_eq!(kinds(&tree, site_node), NodeKind::SITE_CHILDREN.to_vec());
    }

    #[test]
    fn released_nodes_are_gone() {
        let (mut tree, group) = loaded_tree();
        let site_node = tree.children(group)[0];
        let info = tree.children(site_node)[0];

        tree.reset_sites(group);

        assert!(tree.node(site_node).is_none());
        assert!(tree.data(info).is_none());
        assert_eq!(tree.effective_connection(info), None);
        assert_eq!(tree.visible_rows().iter().filter(|row| row.id == site_node).count(), 0);
    }

    #[test]
    fn single_server_expands_server_and_sites() {
        let mut tree = NavigationTree::new();
        tree.populate_single_server(
            &server(4, "solo", Some("10.0.0.4")),
            &[site(1, "a.com", None, None)],
            "forge",
        );

        let server_node = tree.servers()[0];
        let group = tree.sites_group_of(4).unwrap();
        assert_eq!(tree.servers().len(), 1);
        assert!(tree.is_expanded(server_node));
        assert!(tree.is_expanded(group));
        assert!(tree.data(group).unwrap().loaded);
        assert_eq!(tree.children(group).len(), 1);
        assert_eq!(kinds(&tree, server_node), NodeKind::SERVER_CHILDREN.to_vec());
    }

    // ---- propagation ----

    #[test]
    fn every_descendant_resolves_server_connection() {
        let (tree, _) = loaded_tree();
        let server_node = tree.servers()[0];

        let mut stack = vec![server_node];
        let mut visited = 0;
        while let Some(id) = stack.pop() {
            assert_eq!(tree.effective_connection(id), Some(("10.0.0.1".to_string(), 2222)));
            stack.extend(tree.children(id).iter().copied());
            visited += 1;
        }
        assert_eq!(visited, 1 + 8 + 1 + 12);
    }

    #[test]
    fn resolved_data_fills_missing_fields_from_ancestors() {
        let (mut tree, group) = loaded_tree();
        let site_node = tree.children(group)[0];
        let workers = tree.children(site_node)[5];
        let data = tree.data_mut(workers).unwrap();
        data.server_ip = None;
        data.ssh_port = 22;
        data.site_directory = None;

        let resolved = tree.resolved_data(workers).unwrap();

        assert_eq!(resolved.kind, NodeKind::Workers);
        assert_eq!(resolved.server_ip.as_deref(), Some("10.0.0.1"));
        assert_eq!(resolved.ssh_port, 2222);
        assert_eq!(resolved.site_directory.as_deref(), Some("/home/forge/example.com"));
        assert_eq!(tree.data(workers).unwrap().server_ip, None);
    }

    #[test]
    fn connection_of_root_is_none() {
        let (tree, _) = loaded_tree();
        assert_eq!(tree.effective_connection(NodeId::ROOT), None);
        assert_eq!(tree.effective_site_directory(tree.servers()[0]), None);
    }

    // ---- directory derivation ----

    #[test]
    fn directory_strips_public_suffix() {
        let s = site(1, "example.com", Some("public"), Some("/home/forge/example.com/public"));
        assert_eq!(derive_site_directory(&s, "forge"), "/home/forge/example.com");
    }

    #[test]
    fn directory_handles_slashes() {
        let s = site(1, "example.com", Some("/public/"), Some("/home/forge/example.com/public/"));
        assert_eq!(derive_site_directory(&s, "forge"), "/home/forge/example.com");
    }

    #[test]
    fn directory_without_web_directory_uses_home() {
        let s = site(1, "example.com", Some("/public"), None);
        assert_eq!(derive_site_directory(&s, "deploy"), "/home/deploy/example.com");
    }

    #[test]
    fn directory_with_empty_relative_path_is_web_directory() {
        let s = site(1, "example.com", Some("/"), Some("/var/www/example"));
        assert_eq!(derive_site_directory(&s, "forge"), "/var/www/example");
    }

    #[test]
    fn directory_with_mismatched_suffix_uses_home() {
        let s = site(1, "example.com", Some("/dist"), Some("/home/forge/example.com/public"));
        assert_eq!(derive_site_directory(&s, "forge"), "/home/forge/example.com");

        let partial = site(1, "app", Some("lic"), Some("/srv/public"));
        assert_eq!(derive_site_directory(&partial, "forge"), "/home/forge/app");
    }

    // ---- cursor ----

    #[test]
    fn activate_selects_and_toggles() {
        let mut tree = NavigationTree::new();
        tree.populate(&[server(1, "web-1", None)]);
        let server_node = tree.servers()[0];
        tree.set_cursor(server_node);

        assert_eq!(
            tree.activate(),
            vec![TreeEvent::Selected(server_node), TreeEvent::Expanded(server_node)]
        );
        assert_eq!(
            tree.activate(),
            vec![TreeEvent::Selected(server_node), TreeEvent::Collapsed(server_node)]
        );
    }

    #[test]
    fn activate_on_leaf_only_selects() {
        let mut tree = NavigationTree::new();
        tree.populate(&[server(1, "web-1", None)]);
        let info = tree.children(tree.servers()[0])[0];
        tree.set_cursor(info);

        assert_eq!(tree.activate(), vec![TreeEvent::Selected(info)]);
    }

    #[test]
    fn empty_sites_group_is_expandable() {
        let mut tree = NavigationTree::new();
        tree.populate(&[server(1, "web-1", None)]);
        let group = tree.sites_group_of(1).unwrap();

        assert!(tree.is_expandable(group));
        assert_eq!(tree.expand(group), Some(TreeEvent::Expanded(group)));
        assert_eq!(tree.expand(group), None);
    }

    #[test]
    fn cursor_walks_visible_rows_only() {
        let mut tree = NavigationTree::new();
        tree.populate(&[server(1, "a", None), server(2, "b", None)]);

        tree.cursor_down();
        assert_eq!(tree.cursor(), tree.servers()[0]);
        tree.cursor_down();
        assert_eq!(tree.cursor(), tree.servers()[1]);
        tree.cursor_down();
        assert_eq!(tree.cursor(), tree.servers()[1]);
        tree.cursor_first();
        assert_eq!(tree.cursor(), NodeId::ROOT);
        tree.cursor_up();
        assert_eq!(tree.cursor(), NodeId::ROOT);
    }

    #[test]
    fn collapse_or_parent_moves_up() {
        let mut tree = NavigationTree::new();
        tree.populate(&[server(1, "web-1", None)]);
        let server_node = tree.servers()[0];
        tree.expand(server_node);
        let info = tree.children(server_node)[0];
        tree.set_cursor(info);

        assert_eq!(tree.collapse_or_parent(), None);
        assert_eq!(tree.cursor(), server_node);
        assert_eq!(tree.collapse_or_parent(), Some(TreeEvent::Collapsed(server_node)));
        assert_eq!(tree.visible_rows().len(), 2);
    }
}
