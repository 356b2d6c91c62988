//! GraphQL documents sent to the GitHub API. Responses are deserialized
//! by the modules that issue them.

pub const REPO_PROJECTS: &str = r#"
query($owner: String!, $name: String!, $first: Int!) {
  repository(owner: $owner, name: $name) {
    projectsV2(first: $first) {
      nodes {
        id
        title
        number
        url
      }
    }
  }
}"#;

pub const PROJECT_FIELDS: &str = r#"
query($projectId: ID!) {
  node(id: $projectId) {
    ... on ProjectV2 {
      fields(first: 100) {
        nodes {
          ... on ProjectV2SingleSelectField {
            id
            name
            dataType
            options {
              name
              id
            }
          }
          ... on ProjectV2IterationField {
            id
            name
            dataType
            configuration {
              iterations {
                startDate
                id
                title
                duration
              }
            }
          }
          ... on ProjectV2Field {
            id
            name
            dataType
          }
        }
      }
    }
  }
}"#;

pub const ISSUE_PROJECT_LINKS: &str = r#"
query($owner: String!, $name: String!, $issueNumber: Int!) {
  repository(owner: $owner, name: $name) {
    issue(number: $issueNumber) {
      id
      title
      projectItems(first: 20) {
        nodes {
          id
          project {
            id
            title
          }
        }
      }
      projectsV2(first: 100) {
        nodes {
          id
          title
        }
      }
    }
  }
}"#;

pub const ADD_ITEM: &str = r#"
mutation($projectId: ID!, $contentId: ID!) {
  addProjectV2ItemById(input: {
    projectId: $projectId
    contentId: $contentId
  }) {
    item {
      id
    }
  }
}"#;

pub const UPDATE_SINGLE_SELECT_FIELD: &str = r#"
mutation($projectId: ID!, $itemId: ID!, $fieldId: ID!, $optionId: String!) {
  updateProjectV2ItemFieldValue(input: {
    projectId: $projectId
    itemId: $itemId
    fieldId: $fieldId
    value: { singleSelectOptionId: $optionId }
  }) {
    projectV2Item {
      id
    }
  }
}"#;

pub const UPDATE_ITERATION_FIELD: &str = r#"
mutation($projectId: ID!, $itemId: ID!, $fieldId: ID!, $iterationId: String!) {
  updateProjectV2ItemFieldValue(input: {
    projectId: $projectId
    itemId: $itemId
    fieldId: $fieldId
    value: { iterationId: $iterationId }
  }) {
    projectV2Item {
      id
    }
  }
}"#;

pub const UPDATE_NUMBER_FIELD: &str = r#"
mutation($projectId: ID!, $itemId: ID!, $fieldId: ID!, $value: Float!) {
  updateProjectV2ItemFieldValue(input: {
    projectId: $projectId
    itemId: $itemId
    fieldId: $fieldId
    value: { number: $value }
  }) {
    projectV2Item {
      id
    }
  }
}"#;

pub const UPDATE_DATE_FIELD: &str = r#"
mutation($projectId: ID!, $itemId: ID!, $fieldId: ID!, $value: Date!) {
  updateProjectV2ItemFieldValue(input: {
    projectId: $projectId
    itemId: $itemId
    fieldId: $fieldId
    value: { date: $value }
  }) {
    projectV2Item {
      id
    }
  }
}"#;

pub const UPDATE_TEXT_FIELD: &str = r#"
mutation($projectId: ID!, $itemId: ID!, $fieldId: ID!, $value: String!) {
  updateProjectV2ItemFieldValue(input: {
    projectId: $projectId
    itemId: $itemId
    fieldId: $fieldId
    value: { text: $value }
  }) {
    projectV2Item {
      id
    }
  }
}"#;
