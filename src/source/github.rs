use crate::foundation::error::{StrokeError, StrokeResult};
use crate::source::{Entry, RecordSource, RemoteSpec, filter_entries};

const DEFAULT_API_BASE: &str = "https://api.github.com";
const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com";

/// Endpoints and identity used for GitHub requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteConfig {
    /// REST API root (repository metadata and git trees).
    pub api_base: String,
    /// Raw file content root.
    pub raw_base: String,
    /// `User-Agent` header; the GitHub API rejects requests without one.
    pub user_agent: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            raw_base: DEFAULT_RAW_BASE.to_string(),
            user_agent: concat!("strokeprep/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl RemoteConfig {
    /// Defaults, overridden by `STROKEPREP_GITHUB_API` / `STROKEPREP_GITHUB_RAW` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var("STROKEPREP_GITHUB_API")
            && !value.trim().is_empty()
        {
            config.api_base = value.trim().trim_end_matches('/').to_string();
        }
        if let Ok(value) = std::env::var("STROKEPREP_GITHUB_RAW")
            && !value.trim().is_empty()
        {
            config.raw_base = value.trim().trim_end_matches('/').to_string();
        }
        config
    }
}

#[derive(serde::Deserialize)]
struct RepoInfo {
    default_branch: String,
}

#[derive(serde::Deserialize)]
struct GitTree {
    tree: Vec<GitTreeItem>,
    #[serde(default)]
    truncated: bool,
}

#[derive(serde::Deserialize)]
struct GitTreeItem {
    path: String,
    #[serde(rename = "type")]
    kind: String,
    sha: String,
}

/// Payloads listed from a folder of a GitHub repository and fetched as raw files.
pub struct GithubSource {
    agent: ureq::Agent,
    config: RemoteConfig,
    repo: String,
    folder: String,
    branch: String,
    folder_tree: String,
}

impl std::fmt::Debug for GithubSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubSource")
            .field("repo", &self.repo)
            .field("folder", &self.folder)
            .field("branch", &self.branch)
            .field("folder_tree", &self.folder_tree)
            .finish()
    }
}

impl GithubSource {
    /// Resolve the branch and walk the git trees down to `spec.folder`.
    #[tracing::instrument(skip(config), fields(repo = %spec.repo, folder = %spec.folder))]
    pub fn connect(spec: &RemoteSpec, config: &RemoteConfig) -> StrokeResult<Self> {
        let mut source = Self {
            agent: ureq::Agent::new_with_defaults(),
            config: config.clone(),
            repo: spec.repo.clone(),
            folder: spec.folder.trim_matches('/').to_string(),
            branch: String::new(),
            folder_tree: String::new(),
        };

        source.branch = match &spec.branch {
            Some(branch) => branch.clone(),
            None => source.default_branch()?,
        };
        tracing::debug!(branch = %source.branch, "resolved branch");

        let mut tree_ref = source.branch.clone();
        for segment in source.folder.split('/').filter(|s| !s.is_empty()) {
            let tree = source.get_tree(&tree_ref)?;
            tree_ref = find_subtree(&tree, segment)
                .ok_or_else(|| StrokeError::SourceNotFound {
                    repo: source.repo.clone(),
                    folder: source.folder.clone(),
                })?
                .to_string();
        }
        source.folder_tree = tree_ref;
        Ok(source)
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    fn default_branch(&self) -> StrokeResult<String> {
        let url = format!("{}/repos/{}", self.config.api_base, self.repo);
        let body = self.get_text(&url)?;
        parse_default_branch(&body)
    }

    fn get_tree(&self, tree_ref: &str) -> StrokeResult<GitTree> {
        let url = format!(
            "{}/repos/{}/git/trees/{}",
            self.config.api_base,
            self.repo,
            encode_path(tree_ref)
        );
        let body = self.get_text(&url)?;
        let tree = parse_tree(&body)?;
        if tree.truncated {
            return Err(StrokeError::fetch(format!(
                "git tree listing for '{tree_ref}' in '{}' was truncated",
                self.repo
            )));
        }
        Ok(tree)
    }

    fn get_text(&self, url: &str) -> StrokeResult<String> {
        tracing::trace!(%url, "GET");
        let response = self
            .agent
            .get(url)
            .header("User-Agent", self.config.user_agent.as_str())
            .call()
            .map_err(|err| StrokeError::fetch(format!("GET {url}: {err}")))?;
        response
            .into_body()
            .read_to_string()
            .map_err(|err| StrokeError::fetch(format!("reading body of {url}: {err}")))
    }

    fn raw_url(&self, entry: &Entry) -> String {
        let mut path = self.folder.clone();
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(&entry.name);
        format!(
            "{}/{}/{}/{}",
            self.config.raw_base,
            self.repo,
            encode_path(&self.branch),
            encode_path(&path)
        )
    }
}

impl RecordSource for GithubSource {
    fn describe(&self) -> String {
        format!("github:{}@{}/{}", self.repo, self.branch, self.folder)
    }

    fn entries(&self) -> StrokeResult<Vec<Entry>> {
        let tree = self.get_tree(&self.folder_tree)?;
        Ok(blob_entries(&tree))
    }

    fn fetch(&self, entry: &Entry) -> StrokeResult<String> {
        self.get_text(&self.raw_url(entry))
    }
}

fn parse_default_branch(body: &str) -> StrokeResult<String> {
    let info: RepoInfo = serde_json::from_str(body)
        .map_err(|e| StrokeError::fetch(format!("unexpected repository response: {e}")))?;
    Ok(info.default_branch)
}

fn parse_tree(body: &str) -> StrokeResult<GitTree> {
    serde_json::from_str(body)
        .map_err(|e| StrokeError::fetch(format!("unexpected git tree response: {e}")))
}

fn find_subtree<'a>(tree: &'a GitTree, name: &str) -> Option<&'a str> {
    tree.tree
        .iter()
        .find(|item| item.kind == "tree" && item.path == name)
        .map(|item| item.sha.as_str())
}

fn blob_entries(tree: &GitTree) -> Vec<Entry> {
    filter_entries(
        tree.tree
            .iter()
            .filter(|item| item.kind == "blob")
            .map(|item| item.path.clone()),
    )
}

/// Percent-encode everything outside RFC 3986 unreserved characters, keeping `/`.
fn encode_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for byte in path.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/source/github.rs"]
mod tests;
